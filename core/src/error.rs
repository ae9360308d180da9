//! Error types for the todo API client.
//!
//! # Design
//! One taxonomy covers every way a remote operation can fail: the
//! round-trip itself (`Transport`), a non-success status (`NotFound` gets a
//! dedicated variant because callers frequently distinguish "the resource
//! does not exist" from "the server returned an unexpected status"), and
//! payload encoding/decoding. A failed operation leaves the collection
//! untouched; the caller decides how to surface the message.

use std::fmt;

/// Errors returned by `TodoClient` parse methods and `TodoStore`
/// operations.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip failed before a status line was read.
    Transport(String),

    /// The server returned 404 — the requested todo does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::NotFound => write!(f, "todo not found"),
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
