use axum::{extract::State, Json};
use common::types::Outcome;
use service::records::{AnchorInput, AnchorRecord, Lookup};

use crate::errors::ApiError;
use crate::state::AppState;

/// Overwrite the anchor slot with the posted id/creator.
pub async fn add_anchor(
    State(state): State<AppState>,
    Json(input): Json<AnchorInput>,
) -> Result<Json<AnchorRecord>, ApiError> {
    let record = state.records.add_anchor(input).await?;
    Ok(Json(record))
}

pub async fn query_anchor(State(state): State<AppState>) -> Result<Json<Lookup<AnchorRecord>>, ApiError> {
    Ok(Json(state.records.query_anchor().await?))
}

/// Always reports success, whether or not an anchor was stored.
pub async fn remove_anchor(State(state): State<AppState>) -> Result<Json<Outcome>, ApiError> {
    state.records.remove_anchor().await?;
    Ok(Json(Outcome::success()))
}
