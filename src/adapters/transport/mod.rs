//! Transport adapters.

mod mock;

pub use mock::{RecordingTransport, SentMessage};
