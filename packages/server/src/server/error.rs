use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domains::notifications::DispatchError;

/// API-level errors with HTTP mappings.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("records store request failed")]
    Upstream(#[from] anyhow::Error),
}

impl From<DispatchError> for ApiError {
    fn from(error: DispatchError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(error) => {
                tracing::error!(error = %error, "records store request failed");
                StatusCode::BAD_GATEWAY
            }
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
