//! Storage abstractions for service layer
//!
//! A `RecordStore` holds at most one serialized value per `RecordKind`.
//! Writes replace the previous value wholesale.

pub mod file_store;
pub mod memory_store;
pub mod record_store;

pub use file_store::FileRecordStore;
pub use memory_store::MemoryRecordStore;
pub use record_store::{RecordKind, RecordStore};
