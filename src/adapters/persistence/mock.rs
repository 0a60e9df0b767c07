//! Recording record store for tests and development.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{RecordStore, RecordStoreError};

/// One appended row, as the store received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedRecord {
    pub sheet: String,
    pub fields: Vec<String>,
}

/// Record store that keeps appended rows in memory.
///
/// `fail_next(true)` makes subsequent appends fail, for exercising the
/// persistence-failure path.
#[derive(Debug, Default)]
pub struct RecordingRecordStore {
    appended: Mutex<Vec<AppendedRecord>>,
    failing: AtomicBool,
}

impl RecordingRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles failure mode for subsequent appends.
    pub fn fail_next(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns a snapshot of everything appended so far.
    pub async fn appended(&self) -> Vec<AppendedRecord> {
        self.appended.lock().await.clone()
    }
}

#[async_trait]
impl RecordStore for RecordingRecordStore {
    async fn append_record(
        &self,
        sheet: &str,
        fields: Vec<String>,
    ) -> Result<(), RecordStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RecordStoreError::Unavailable("record store failing".to_string()));
        }
        self.appended
            .lock()
            .await
            .push(AppendedRecord { sheet: sheet.to_string(), fields });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appended_rows_are_recorded_in_order() {
        let store = RecordingRecordStore::new();
        store.append_record("A", vec!["1".to_string()]).await.unwrap();
        store.append_record("B", vec!["2".to_string()]).await.unwrap();

        let rows = store.appended().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sheet, "A");
        assert_eq!(rows[1].fields, vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn failure_mode_rejects_appends_without_recording() {
        let store = RecordingRecordStore::new();
        store.fail_next(true);

        assert!(store.append_record("A", vec![]).await.is_err());
        assert!(store.appended().await.is_empty());

        store.fail_next(false);
        assert!(store.append_record("A", vec![]).await.is_ok());
    }
}
