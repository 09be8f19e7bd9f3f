//! Error-to-response mapping for the HTTP boundary.
//!
//! # Design
//! Store errors keep their meaning across the wire: `EmptyText` is a 422
//! (the client sent a well-formed but invalid payload) and `NotFound` a
//! 404, both with a small JSON error body. Body-extraction rejections
//! already know their own status and message, so they pass through
//! untouched. Render failures are the only server-side fault and map
//! to a bare 500.

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_store::StoreError;
use tracing::error;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    JsonBody(#[from] JsonRejection),

    #[error(transparent)]
    FormBody(#[from] FormRejection),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(err @ StoreError::EmptyText) => {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
            AppError::Store(err @ StoreError::NotFound(_)) => {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
            AppError::JsonBody(rejection) => rejection.into_response(),
            AppError::FormBody(rejection) => rejection.into_response(),
            AppError::Render(err) => {
                error!(error = %err, "template rendering failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
