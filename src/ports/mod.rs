//! Ports - interfaces to external collaborators.
//!
//! The flow engine consumes three collaborators it does not own: the
//! message transport, the durable record store, and the structured document
//! source. All three are fallible black boxes behind async traits; the
//! engine treats their failures as data, never as fatal faults.

mod document_source;
mod record_store;
mod transport;

pub use document_source::{DocumentSource, DocumentSourceError};
pub use record_store::{RecordStore, RecordStoreError};
pub use transport::{ReplyOptions, Transport, TransportError};
