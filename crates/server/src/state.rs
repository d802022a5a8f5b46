use std::sync::Arc;

use service::services::RecordService;
use service::storage::RecordStore;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<RecordService>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { records: Arc::new(RecordService::new(store)) }
    }
}
