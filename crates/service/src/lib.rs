//! Service layer for the anchor registry.
//! - `storage`: single-slot record stores (file-backed and in-memory).
//! - `records`: wire/persisted record types.
//! - `services`: typed anchor/host operations on top of a store.

pub mod errors;
pub mod records;
pub mod services;
pub mod storage;
#[cfg(test)]
pub mod test_support;
