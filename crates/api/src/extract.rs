//! Request body extractors whose rejections render as [`AppError`] JSON.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` that rejects malformed bodies with a 400 `BAD_REQUEST` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::Form` that rejects malformed bodies with a 400 `BAD_REQUEST` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);
