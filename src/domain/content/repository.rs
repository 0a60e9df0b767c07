//! Content repository: job-description resolution.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::Language;
use crate::ports::{DocumentSource, DocumentSourceError};

use super::formatter::format_for_chat;

/// Failure modes of description resolution. All of them are recoverable:
/// the dialog shows a generic error and keeps the visitor where they are.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No document is registered for the language.
    #[error("no description document for language '{language}'")]
    DocumentMissing { language: Language },

    /// The document exists but has no section for the title.
    #[error("no description section for job '{title}'")]
    SectionMissing { title: String },

    /// The document source failed.
    #[error(transparent)]
    Source(#[from] DocumentSourceError),
}

/// Resolves a (job title, language) pair to a formatted description.
#[derive(Clone)]
pub struct ContentRepository {
    source: Arc<dyn DocumentSource>,
}

impl ContentRepository {
    /// Creates a repository over a document source.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Loads the language's document, extracts the section whose top-level
    /// header equals `job_title`, and reformats it for chat display.
    ///
    /// The title match is exact (case- and whitespace-sensitive after
    /// trimming the header marker). Resolving the same title twice is
    /// idempotent; the document is re-read on every call.
    pub async fn resolve(
        &self,
        job_title: &str,
        language: Language,
    ) -> Result<String, ContentError> {
        let document = self.source.load(language).await.map_err(|err| match err {
            DocumentSourceError::NotFound(language) => {
                tracing::warn!(%language, "description document not registered");
                ContentError::DocumentMissing { language }
            }
            other => other.into(),
        })?;

        let section = extract_section(&document, job_title).ok_or_else(|| {
            tracing::warn!(%language, job_title, "description section not found");
            ContentError::SectionMissing { title: job_title.to_string() }
        })?;

        Ok(format_for_chat(&section, language))
    }
}

/// Returns the lines from the `# {title}` header up to (but excluding) the
/// next top-level header, or None when no section matches.
fn extract_section(document: &str, title: &str) -> Option<String> {
    let mut lines: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in document.lines() {
        if let Some(header) = line.strip_prefix("# ") {
            let header = header.trim();
            if in_section && header != title {
                break;
            }
            in_section = in_section || header == title;
        }
        if in_section {
            lines.push(line);
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
# Pracownik produkcji

Opis stanowiska.

## Co dla nas jest ważne

- Dokładność

# Kasjer do supermarketu

Inny opis.
";

    mod section_extraction {
        use super::*;

        #[test]
        fn finds_section_by_exact_title() {
            let section = extract_section(DOCUMENT, "Pracownik produkcji").unwrap();
            assert!(section.starts_with("# Pracownik produkcji"));
            assert!(section.contains("Opis stanowiska."));
            assert!(section.contains("- Dokładność"));
        }

        #[test]
        fn stops_before_the_next_top_level_header() {
            let section = extract_section(DOCUMENT, "Pracownik produkcji").unwrap();
            assert!(!section.contains("Kasjer"));
            assert!(!section.contains("Inny opis."));
        }

        #[test]
        fn second_level_headers_do_not_terminate_a_section() {
            let section = extract_section(DOCUMENT, "Pracownik produkcji").unwrap();
            assert!(section.contains("## Co dla nas jest ważne"));
        }

        #[test]
        fn last_section_runs_to_end_of_document() {
            let section = extract_section(DOCUMENT, "Kasjer do supermarketu").unwrap();
            assert!(section.contains("Inny opis."));
        }

        #[test]
        fn title_match_is_exact() {
            assert!(extract_section(DOCUMENT, "pracownik produkcji").is_none());
            assert!(extract_section(DOCUMENT, "Pracownik").is_none());
        }

        #[test]
        fn missing_section_returns_none() {
            assert!(extract_section(DOCUMENT, "Nieistniejące stanowisko").is_none());
        }

        #[test]
        fn header_whitespace_is_trimmed_before_matching() {
            let document = "#   Pracownik produkcji  \ntreść";
            let section = extract_section(document, "Pracownik produkcji").unwrap();
            assert!(section.contains("treść"));
        }
    }

    mod resolution {
        use super::*;
        use crate::adapters::content::InMemoryDocumentSource;

        fn repository() -> ContentRepository {
            let source =
                InMemoryDocumentSource::new().with_document(Language::Pl, DOCUMENT.to_string());
            ContentRepository::new(Arc::new(source))
        }

        #[tokio::test]
        async fn resolves_and_formats_a_known_job() {
            let description = repository()
                .resolve("Pracownik produkcji", Language::Pl)
                .await
                .unwrap();
            assert!(description.starts_with("🏭 *Pracownik produkcji*"));
            assert!(description.contains("• Dokładność"));
        }

        #[tokio::test]
        async fn missing_section_is_reported() {
            let err = repository()
                .resolve("Nieznane stanowisko", Language::Pl)
                .await
                .unwrap_err();
            assert!(matches!(err, ContentError::SectionMissing { .. }));
        }

        #[tokio::test]
        async fn missing_document_is_reported() {
            let err = repository()
                .resolve("Касир до супермаркету", Language::Ua)
                .await
                .unwrap_err();
            assert!(matches!(err, ContentError::DocumentMissing { .. }));
        }
    }
}
