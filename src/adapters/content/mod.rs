//! Document source adapters.

mod fs;
mod in_memory;

pub use fs::FsDocumentSource;
pub use in_memory::InMemoryDocumentSource;
