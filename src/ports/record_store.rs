//! RecordStore port - durable tabular persistence of finalized submissions.
//!
//! Two logical record kinds are appended: job applications (10 fields) and
//! contact requests (9 fields). Field order is significant and fixed per
//! kind; the engine builds rows, the store only appends them.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the persistence collaborator.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// The backing store could not be reached.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// The append itself failed.
    #[error("append failed: {0}")]
    Append(String),
}

/// Port for appending finalized submissions to a named sheet.
///
/// Implementations own their own timeout/retry behavior; the engine treats
/// a failure as final for the submission (no buffering, no retry).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Appends one row of ordered fields to the named sheet.
    async fn append_record(&self, sheet: &str, fields: Vec<String>)
        -> Result<(), RecordStoreError>;
}
