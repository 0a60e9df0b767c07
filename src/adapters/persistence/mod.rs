//! Record store adapters.

mod mock;

pub use mock::{AppendedRecord, RecordingRecordStore};
