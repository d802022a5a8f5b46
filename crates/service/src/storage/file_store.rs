use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use super::record_store::{RecordKind, RecordStore};
use crate::errors::ServiceError;

/// File-backed store: one JSON file per record kind inside `dir`.
///
/// Writes land in a temporary sibling file which is then renamed over the
/// slot, so readers observe either the previous record or the new one.
/// There is no locking between writers; the last rename wins.
#[derive(Clone, Debug)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Initialize the store rooted at `dir`, creating the directory if missing.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(ServiceError::storage)?;
        Ok(Arc::new(Self { dir }))
    }

    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    fn temp_path_for(&self, kind: RecordKind) -> PathBuf {
        self.dir.join(format!(".{}.{}.tmp", kind.file_name(), Uuid::new_v4()))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn write(&self, kind: RecordKind, bytes: Vec<u8>) -> Result<(), ServiceError> {
        let target = self.path_for(kind);
        let tmp = self.temp_path_for(kind);
        let replaced = async {
            fs::write(&tmp, &bytes).await?;
            fs::rename(&tmp, &target).await
        }
        .await;
        if let Err(e) = replaced {
            // covers a short write as well as a failed rename
            warn!(%kind, error = %e, "replacing slot failed; discarding temp file");
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::storage(e));
        }
        debug!(%kind, path = %target.display(), len = bytes.len(), "record slot replaced");
        Ok(())
    }

    async fn read(&self, kind: RecordKind) -> Result<Option<Vec<u8>>, ServiceError> {
        match fs::read(self.path_for(kind)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::storage(e)),
        }
    }

    async fn delete(&self, kind: RecordKind) -> Result<bool, ServiceError> {
        match fs::remove_file(self.path_for(kind)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ServiceError::storage(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_data_dir;

    #[tokio::test]
    async fn file_store_overwrite_and_delete() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir("file_store");
        let store = FileRecordStore::new(&dir).await?;

        // initially empty
        assert!(store.read(RecordKind::Anchor).await?.is_none());

        store.write(RecordKind::Anchor, b"{\"a\":1}".to_vec()).await?;
        store.write(RecordKind::Anchor, b"{\"a\":2}".to_vec()).await?;
        assert_eq!(store.read(RecordKind::Anchor).await?, Some(b"{\"a\":2}".to_vec()));
        assert!(dir.join("anchor_data.json").exists());

        // reload from disk to ensure persistence
        let reopened = FileRecordStore::new(&dir).await?;
        assert_eq!(reopened.read(RecordKind::Anchor).await?, Some(b"{\"a\":2}".to_vec()));

        assert!(store.delete(RecordKind::Anchor).await?);
        assert!(!store.delete(RecordKind::Anchor).await?);
        assert!(store.read(RecordKind::Anchor).await?.is_none());

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn file_store_leaves_no_temp_files() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir("file_store_tmp");
        let store = FileRecordStore::new(&dir).await?;
        for i in 0..5 {
            store.write(RecordKind::Host, format!("{i}").into_bytes()).await?;
        }
        let mut entries = tokio::fs::read_dir(&dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        assert_eq!(names, vec!["host_data.json".to_string()]);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_replace_removes_temp_file() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir("file_store_fail");
        let store = FileRecordStore::new(&dir).await?;
        // a non-empty directory in the slot makes the rename fail
        let slot = store.path_for(RecordKind::Host);
        tokio::fs::create_dir_all(slot.join("blocker")).await?;

        let err = store.write(RecordKind::Host, b"h1".to_vec()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));

        let mut entries = tokio::fs::read_dir(&dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        assert_eq!(names, vec!["host_data.json".to_string()]);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn write_into_vanished_dir_is_storage_error() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir("file_store_gone");
        let store = FileRecordStore::new(&dir).await?;
        tokio::fs::remove_dir_all(&dir).await?;

        let err = store.write(RecordKind::Anchor, b"{}".to_vec()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert!(!dir.exists());
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_writes_never_tear() -> Result<(), anyhow::Error> {
        let dir = temp_data_dir("file_store_race");
        let store = FileRecordStore::new(&dir).await?;
        let a = vec![b'a'; 64 * 1024];
        let b = vec![b'b'; 64 * 1024];

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            let payload = if i % 2 == 0 { a.clone() } else { b.clone() };
            handles.push(tokio::spawn(async move { store.write(RecordKind::Anchor, payload).await }));
        }
        for h in handles {
            h.await??;
        }

        let stored = store.read(RecordKind::Anchor).await?.unwrap();
        assert!(stored == a || stored == b);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
