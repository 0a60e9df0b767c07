//! Adapters - concrete implementations of the ports.
//!
//! The crate ships a filesystem document source for deployments, an
//! in-memory document source for tests and development, and recording mocks
//! for the transport and record-store collaborators.

pub mod content;
pub mod persistence;
pub mod transport;
