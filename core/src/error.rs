//! Error types for the feed API client.
//!
//! # Design
//! Each variant marks where the failure originated: `Timeout`, `HttpError`,
//! `MalformedResponse` and `Network` come from the transport, `RpcError` is
//! an explicit method-level error reported inside a well-formed envelope,
//! and `NotFound` comes from the mock data source's get-user lookup (the one
//! fallback lookup with no permissive default). The transport never recovers
//! from its own errors; the facade is the sole recovery point.

use std::fmt;

/// Errors surfaced by the transport, the mock data source, or decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request was aborted after the configured timeout with no response.
    Timeout,

    /// The server answered with a non-2xx status. Carries the raw body for
    /// debugging.
    HttpError { status: u16, body: String },

    /// The response body could not be parsed as a JSON-RPC envelope, or the
    /// result inside it did not match the expected shape.
    MalformedResponse(String),

    /// The endpoint returned a well-formed `{"error": {code, message}}`
    /// envelope. Distinct from a transport-level HTTP failure.
    RpcError { code: i64, message: String },

    /// An identifier-keyed lookup found no matching entity.
    NotFound,

    /// Connection-level failure: refused, DNS, TLS. Distinguished only by
    /// message content.
    Network(String),
}

impl ApiError {
    /// User-facing message for an error state, matching the presentation the
    /// web client ships: connectivity, blocked origin, 404 and 500 each get
    /// friendlier text; everything else includes the underlying error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout => {
                "Request timed out. Please check your connection and try again.".to_string()
            }
            ApiError::Network(msg) if is_cors_flavored(msg) => {
                "Network access blocked. The server may not accept requests from this origin."
                    .to_string()
            }
            ApiError::Network(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            ApiError::HttpError { status: 404, .. } => {
                "The requested endpoint was not found.".to_string()
            }
            ApiError::HttpError { status: 500, .. } => {
                "The server hit an internal error. Please try again.".to_string()
            }
            other => format!("Something went wrong: {other}"),
        }
    }
}

fn is_cors_flavored(msg: &str) -> bool {
    let lower = msg.to_lowercase();
    lower.contains("cors") || lower.contains("origin")
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::HttpError { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            ApiError::RpcError { code, message } => {
                write!(f, "JSON-RPC error {code}: {message}")
            }
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
