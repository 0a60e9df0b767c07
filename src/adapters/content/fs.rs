//! Filesystem document source.
//!
//! Reads one markdown document per language from a configured directory,
//! named `Job_descriptions_<suffix>.md`. The document is re-read on every
//! load, so description edits take effect without a restart.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::ports::{DocumentSource, DocumentSourceError};

/// Document source backed by a directory of per-language markdown files.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    dir: PathBuf,
}

impl FsDocumentSource {
    /// Creates a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, language: Language) -> PathBuf {
        self.dir
            .join(format!("Job_descriptions_{}.md", language.document_suffix()))
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn load(&self, language: Language) -> Result<String, DocumentSourceError> {
        let path = self.path_for(language);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(%language, path = %path.display(), "description file not found");
                Err(DocumentSourceError::NotFound(language))
            }
            Err(err) => {
                tracing::error!(%language, path = %path.display(), %err, "failed to read description file");
                Err(DocumentSourceError::Read(err.to_string()))
            }
        }
    }
}
