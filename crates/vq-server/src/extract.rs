//! Request extractors that report failures in the API's JSON error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections (bad syntax, wrong types, missing
/// content type) become [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
