use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::catalog::MovieError;

/// Request rejected before any store mutation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedMovie(#[from] MovieError),
    #[error("Missing {0}")]
    MissingParameter(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejected request: {}", self);
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
