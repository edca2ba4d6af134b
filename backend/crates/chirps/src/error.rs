//! Chirp Error Types
//!
//! Chirp-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::services::ContentError;

pub type ChirpResult<T> = Result<T, ChirpError>;

#[derive(Debug, Error)]
pub enum ChirpError {
    /// Body exceeds the configured maximum length
    #[error("Chirp is too long")]
    TooLong { max: usize, actual: usize },

    #[error("Chirp not found")]
    NotFound,

    /// Store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChirpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChirpError::TooLong { .. } => ErrorKind::BadRequest,
            ChirpError::NotFound => ErrorKind::NotFound,
            ChirpError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ChirpError::TooLong { max, .. } => {
                err.with_action(format!("Keep chirps within {} bytes", max))
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            ChirpError::Internal(msg) => {
                tracing::error!(message = %msg, "Chirp internal error");
            }
            ChirpError::TooLong { max, actual } => {
                tracing::debug!(max, actual, "Rejected over-length chirp");
            }
            ChirpError::NotFound => {
                tracing::debug!(error = %self, "Chirp error");
            }
        }
    }
}

impl From<ContentError> for ChirpError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::TooLong { max, actual } => ChirpError::TooLong { max, actual },
        }
    }
}

impl From<ChirpError> for AppError {
    fn from(err: ChirpError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ChirpError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
