use thiserror::Error;

use crate::storage::RecordKind;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("corrupt {kind} record: {message}")]
    CorruptState { kind: RecordKind, message: String },
    #[error("encode error: {0}")]
    Encode(String),
}

impl ServiceError {
    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }

    pub fn corrupt(kind: RecordKind, e: impl std::fmt::Display) -> Self {
        Self::CorruptState { kind, message: e.to_string() }
    }
}
