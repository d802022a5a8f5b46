use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::{types::Health, SERVICE_VERSION};

use crate::state::AppState;

pub mod anchors;
pub mod hosts;

pub async fn home() -> &'static str {
    "Hello World"
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn version() -> &'static str {
    SERVICE_VERSION
}

/// Build the full application router: anchor, host and meta routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let meta = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/version", get(version));

    let anchor_routes = Router::new()
        .route("/add_anchor", post(anchors::add_anchor))
        .route("/query_anchor", get(anchors::query_anchor))
        .route("/remove_anchor", get(anchors::remove_anchor));

    let host_routes = Router::new()
        .route("/add_host", post(hosts::add_host))
        .route("/query_host", get(hosts::query_host));

    meta.merge(anchor_routes)
        .merge(host_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
