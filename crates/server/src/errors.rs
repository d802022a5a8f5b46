use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Handler error: a store failure rendered as a JSON 500.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self.0 {
            ServiceError::Storage(_) => "storage",
            ServiceError::CorruptState { .. } => "corrupt_state",
            ServiceError::Encode(_) => "encode",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let msg = self.0.to_string();
        error!(error = %msg, kind, "request failed");
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, Json(serde_json::json!({"error": msg, "kind": kind}))).into_response()
    }
}
