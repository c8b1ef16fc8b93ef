use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum BlogError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Post not found")]
    PostNotFound,
}

impl IntoResponse for BlogError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            BlogError::PostNotFound => (StatusCode::NOT_FOUND, "Post not found"),
            BlogError::Database(ref e) => {
                error!(error = %e, "storage failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
            }
            BlogError::Io(ref e) => {
                error!(error = %e, "io failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
            }
            BlogError::Config(ref e) => {
                error!(error = %e, "configuration failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
            }
        };
        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}

/// Error body returned to clients: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
