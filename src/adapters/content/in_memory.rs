//! In-memory document source for tests and development.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::ports::{DocumentSource, DocumentSourceError};

/// Document source holding per-language documents in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentSource {
    documents: HashMap<Language, String>,
}

impl InMemoryDocumentSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document for a language.
    pub fn with_document(mut self, language: Language, document: String) -> Self {
        self.documents.insert(language, document);
        self
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn load(&self, language: Language) -> Result<String, DocumentSourceError> {
        self.documents
            .get(&language)
            .cloned()
            .ok_or(DocumentSourceError::NotFound(language))
    }
}
