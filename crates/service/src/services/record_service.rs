use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use chrono::Utc;
use common::types::Outcome;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::records::{AnchorInput, AnchorRecord, HostInput, HostOutcome, HostRecord, Lookup, NotFound};
use crate::storage::{RecordKind, RecordStore};

/// Typed anchor/host operations over a single-slot `RecordStore`.
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    last_stamp: AtomicI64,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store, last_stamp: AtomicI64::new(0) }
    }

    /// Current time in milliseconds, never earlier than a stamp already handed out.
    fn next_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self.last_stamp.fetch_max(now, Ordering::SeqCst);
        prev.max(now)
    }

    async fn put<T: Serialize>(&self, kind: RecordKind, value: &T) -> Result<(), ServiceError> {
        let bytes = serde_json::to_vec(value).map_err(|e| ServiceError::Encode(e.to_string()))?;
        self.store.write(kind, bytes).await
    }

    async fn get<T: DeserializeOwned>(&self, kind: RecordKind) -> Result<Lookup<T>, ServiceError> {
        match self.store.read(kind).await? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes).map_err(|e| ServiceError::corrupt(kind, e))?;
                Ok(Lookup::Found(value))
            }
            None => {
                debug!(%kind, "slot empty");
                Ok(Lookup::Missing(NotFound::for_kind(kind)))
            }
        }
    }

    /// Overwrite the anchor slot, stamping the current time.
    pub async fn add_anchor(&self, input: AnchorInput) -> Result<AnchorRecord, ServiceError> {
        let record = AnchorRecord::new(input, self.next_stamp());
        self.put(RecordKind::Anchor, &record).await?;
        info!(id = ?record.id, creator = ?record.creator, ctime = %record.ctime, "anchor stored");
        Ok(record)
    }

    pub async fn query_anchor(&self) -> Result<Lookup<AnchorRecord>, ServiceError> {
        self.get(RecordKind::Anchor).await
    }

    /// Clear the anchor slot; returns whether one existed.
    pub async fn remove_anchor(&self) -> Result<bool, ServiceError> {
        let existed = self.store.delete(RecordKind::Anchor).await?;
        info!(existed, "anchor removed");
        Ok(existed)
    }

    /// Store the hostname, or clear the slot when `op` is `"delete"`.
    pub async fn add_host(&self, input: HostInput) -> Result<HostOutcome, ServiceError> {
        if input.is_delete() {
            let existed = self.store.delete(RecordKind::Host).await?;
            info!(existed, "host removed");
            return Ok(HostOutcome::Deleted(Outcome::success()));
        }
        let record = HostRecord::new(input.hostname);
        self.put(RecordKind::Host, &record).await?;
        info!(hostname = ?record.hostname, "host stored");
        Ok(HostOutcome::Stored(record))
    }

    pub async fn query_host(&self) -> Result<Lookup<HostRecord>, ServiceError> {
        self.get(RecordKind::Host).await
    }
}
