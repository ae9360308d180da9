//! HTTP transport types and the executor seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the
//! network; whoever composes the store supplies a `Transport` that executes
//! the actual round-trip. This keeps every piece of state logic
//! deterministic and testable with canned responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed
//! across threads or process boundaries without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and executed by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`], then passed to `TodoClient::parse_*`
/// methods for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes an [`HttpRequest`] against the real backend.
///
/// Implementations must return non-2xx responses as data rather than as
/// errors — status interpretation belongs to the client's `parse_*`
/// methods. `Err` is reserved for round-trips that never produced a status
/// line (connection refused, DNS failure, and the like), reported as
/// [`ApiError::Transport`].
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
