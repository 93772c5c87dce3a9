pub mod atomic_writer;
pub mod json_kv_store;
pub mod memory_kv_store;

pub use atomic_writer::AtomicWriter;
pub use json_kv_store::JsonKeyValueStore;
pub use memory_kv_store::MemoryKeyValueStore;
