#![cfg(test)]
use std::path::PathBuf;

/// Unique scratch directory under the system temp dir.
pub fn temp_data_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}", prefix, uuid::Uuid::new_v4()))
}
