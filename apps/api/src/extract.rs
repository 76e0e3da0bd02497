use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejection goes through `AppError`, so a malformed or
/// unknown-variant body answers with the usual `VALIDATION_ERROR` envelope
/// instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
