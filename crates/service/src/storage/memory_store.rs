use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::record_store::{RecordKind, RecordStore};
use crate::errors::ServiceError;

/// In-process store; content is lost on restart.
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    inner: Arc<RwLock<HashMap<RecordKind, Vec<u8>>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn write(&self, kind: RecordKind, bytes: Vec<u8>) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(kind, bytes);
        Ok(())
    }

    async fn read(&self, kind: RecordKind) -> Result<Option<Vec<u8>>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(&kind).cloned())
    }

    async fn delete(&self, kind: RecordKind) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        Ok(map.remove(&kind).is_some())
    }
}
