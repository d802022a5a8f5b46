use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use service::storage::{FileRecordStore, MemoryRecordStore, RecordStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the record store selected by `[storage]`.
pub async fn build_store(cfg: &AppConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match cfg.storage.backend {
        StorageBackend::File => {
            info!(data_dir = %cfg.storage.data_dir, "using file record store");
            FileRecordStore::new(&cfg.storage.data_dir).await?
        }
        StorageBackend::Memory => {
            info!("using in-memory record store");
            MemoryRecordStore::new()
        }
    };
    Ok(store)
}

/// Build the router for a given config without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let store = build_store(cfg).await?;
    Ok(routes::build_router(AppState::new(store), build_cors()))
}

/// Bind `[server]` and run the HTTP server until it fails.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, "starting anchor registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
