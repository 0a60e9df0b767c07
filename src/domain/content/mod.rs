//! Localized job-description content.
//!
//! Resolves a (job title, language) pair to a chat-ready description:
//! loads the language's structured document, extracts the section whose
//! top-level header equals the title, and reformats it for display.

mod formatter;
mod repository;

pub use formatter::format_for_chat;
pub use repository::{ContentError, ContentRepository};
