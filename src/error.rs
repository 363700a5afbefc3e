use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::db::StorageError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A field violates its length/range/positivity constraint.
    #[error("{0}")]
    Validation(String),
    /// A unique key is taken, or a delete is blocked by a reference.
    #[error("{0}")]
    Conflict(String),
    /// A foreign key points at a category that does not exist.
    #[error("{0}")]
    Reference(String),
    #[error("{0}")]
    NotFound(String),
    /// The request body could not be read as the expected JSON payload.
    #[error("{message}")]
    Body { status: StatusCode, message: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) | AppError::Reference(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Body { status, .. } => *status,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            AppError::Storage(err) => {
                error!(error = %err, "storage failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
