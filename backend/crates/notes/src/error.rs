//! Note Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Note-specific result type alias
pub type NoteResult<T> = Result<T, NoteError>;

/// Note-specific error variants
#[derive(Debug, Error)]
pub enum NoteError {
    /// User-correctable input problem, surfaced inline on the form
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoteError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            NoteError::Validation(_) => StatusCode::BAD_REQUEST,
            NoteError::Database(_) | NoteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::Validation(_) => ErrorKind::BadRequest,
            NoteError::Database(_) | NoteError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message shown on re-rendered forms; store failures stay generic
    pub fn user_message(&self) -> String {
        match self {
            NoteError::Validation(msg) => msg.clone(),
            NoteError::Database(_) | NoteError::Internal(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            NoteError::Database(e) => {
                tracing::error!(error = %e, "Note database error");
            }
            NoteError::Internal(msg) => {
                tracing::error!(message = %msg, "Note internal error");
            }
            NoteError::Validation(_) => {
                tracing::debug!(error = %self, "Note validation error");
            }
        }
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        self.log();
        AppError::new(self.kind(), self.user_message()).into_response()
    }
}
