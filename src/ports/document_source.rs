//! DocumentSource port - per-language structured job-description documents.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::Language;

/// Errors surfaced when loading a language's document.
#[derive(Debug, Error)]
pub enum DocumentSourceError {
    /// No document is registered for the language. Recoverable: the caller
    /// reports the content as unavailable and carries on.
    #[error("no document registered for language '{0}'")]
    NotFound(Language),

    /// The backing document exists but could not be read.
    #[error("failed to read document: {0}")]
    Read(String),
}

/// Port resolving a language to its job-descriptions document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Loads the full document text for a language.
    async fn load(&self, language: Language) -> Result<String, DocumentSourceError>;
}
