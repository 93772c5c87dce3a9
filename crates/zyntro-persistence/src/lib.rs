pub mod source;
pub mod store;

pub use source::{JsonWorkspaceSource, WorkspaceData};
pub use store::{AtomicWriter, JsonKeyValueStore, MemoryKeyValueStore};
