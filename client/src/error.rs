//! Error types for the to-do list API client.
//!
//! # Design
//! `NotFound` and `InvalidRequest` get dedicated variants because the page
//! reacts to them differently: a 404 means the item vanished under the user,
//! a 400 carries a validation message worth showing verbatim. All other
//! non-2xx responses land in `HttpError` with the raw status and body for
//! debugging.

use std::fmt;

/// Errors returned by `TodoListClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested item does not exist.
    NotFound,

    /// The server returned 400 with a validation message (extracted from the
    /// `{"error": ...}` body when present, raw body otherwise).
    InvalidRequest(String),

    /// The server returned a non-2xx status other than 400/404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "todo item not found"),
            ApiError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
