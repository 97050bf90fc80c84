use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use galley_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for database
/// failures. The preparation handlers map it into their own envelopes; the
/// [`IntoResponse`] impl covers everything else (notably auth rejections).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `galley_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                ("NOT_FOUND", format!("{entity} with id {id} not found"))
            }
            AppError::Core(CoreError::Unauthorized(msg)) => ("UNAUTHORIZED", msg.clone()),
            other => {
                tracing::error!(error = %other, "Internal error");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
