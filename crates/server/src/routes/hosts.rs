use axum::{extract::State, Json};
use service::records::{HostInput, HostOutcome, HostRecord, Lookup};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn add_host(
    State(state): State<AppState>,
    Json(input): Json<HostInput>,
) -> Result<Json<HostOutcome>, ApiError> {
    Ok(Json(state.records.add_host(input).await?))
}

pub async fn query_host(State(state): State<AppState>) -> Result<Json<Lookup<HostRecord>>, ApiError> {
    Ok(Json(state.records.query_host().await?))
}
