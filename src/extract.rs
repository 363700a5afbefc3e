use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json`, but a malformed body is reported through `AppError` so the
/// client gets the usual `{"error": ...}` shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
