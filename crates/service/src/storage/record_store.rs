use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// The two single-slot record types the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Anchor,
    Host,
}

impl RecordKind {
    /// File name of the backing slot, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            RecordKind::Anchor => "anchor_data.json",
            RecordKind::Host => "host_data.json",
        }
    }

    /// Stable reason code reported when the slot is empty.
    pub fn missing_reason(self) -> &'static str {
        match self {
            RecordKind::Anchor => "0",
            RecordKind::Host => "1",
        }
    }

    pub fn missing_reason_string(self) -> &'static str {
        match self {
            RecordKind::Anchor => "Anchor not found",
            RecordKind::Host => "Host Not Online",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Anchor => f.write_str("anchor"),
            RecordKind::Host => f.write_str("host"),
        }
    }
}

/// Single-slot persistence keyed by record kind.
/// Implementations can be file-backed, in-memory, or remote KV.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Replace the slot content with `bytes`.
    async fn write(&self, kind: RecordKind, bytes: Vec<u8>) -> Result<(), ServiceError>;
    /// Current slot content, `None` when nothing has been written.
    async fn read(&self, kind: RecordKind) -> Result<Option<Vec<u8>>, ServiceError>;
    /// Clear the slot; returns whether anything was there.
    async fn delete(&self, kind: RecordKind) -> Result<bool, ServiceError>;
}
