//! API error taxonomy and its HTTP mapping.
//!
//! # Design
//! `NotFound` gets a dedicated variant because it is the one failure the API
//! maps to 404; everything the client can fix lands in the 400 variants with
//! the exact message the validator produced. `Internal` decides at
//! construction time whether its message may be exposed — the constructor is
//! the only place with access to the configuration, `IntoResponse` is not.
//! Every error renders as a JSON body `{"error": message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::validate::InvalidTitle;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted title failed validation.
    #[error(transparent)]
    InvalidTitle(#[from] InvalidTitle),

    /// The request body was malformed (bad JSON, wrong types, missing
    /// required fields other than the title).
    #[error("{0}")]
    InvalidBody(String),

    /// The requested todo item does not exist.
    #[error("todo item not found")]
    NotFound,

    /// Any other server-side fault. The raw message reaches the client only
    /// when `expose` was set at construction (development mode).
    #[error("{message}")]
    Internal { message: String, expose: bool },
}

impl ApiError {
    /// Wrap an unhandled fault, exposing its message only in development
    /// mode.
    pub fn internal(err: impl std::fmt::Display, dev_mode: bool) -> Self {
        Self::Internal {
            message: err.to_string(),
            expose: dev_mode,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidTitle(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::InvalidBody(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "todo item not found".to_string()),
            ApiError::Internal { message, expose } => {
                tracing::error!(%message, "unhandled server fault");
                let message = if expose {
                    message
                } else {
                    "internal server error".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
