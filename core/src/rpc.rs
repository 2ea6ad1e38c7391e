//! JSON-RPC envelope framing and classification.
//!
//! # Design
//! Request building and response classification are pure functions over
//! plain data; the transport composes them with the actual HTTP round-trip.
//! Keeping this layer free of I/O makes every branch of the outcome
//! classification testable without a server.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Method strings of the remote API. A private contract between the facade
/// and the endpoint; the transport treats them as opaque.
pub mod methods {
    /// Feed listing, parameterized by `{"filter": <label>}`.
    pub const FEED: &str = "/v1/posts/arena";
    /// Single post lookup, parameterized by `{"post_uuid": <id>}`.
    pub const GET_POST: &str = "/v1/posts/get";
    /// Comment tree for a post, parameterized by `{"post_uuid": <id>}`.
    pub const GET_COMMENTS: &str = "/v1/comments/get";
    /// Poll for a post, parameterized by `{"post_uuid": <id>}`.
    pub const GET_POLL: &str = "/v1/polls/get";
    /// Profile lookup, parameterized by `{"user_uuid": <id>}`.
    pub const GET_USER: &str = "/v1/users/get";
}

use crate::error::ApiError;

pub const JSONRPC_VERSION: &str = "2.0";

/// Outbound request envelope. Every call gets a fresh random id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(method: &str, params: Value) -> Self {
        RpcRequest {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Uuid::new_v4().to_string(),
            method: method.to_string(),
            params,
        }
    }
}

/// Inbound response envelope: either `result` or `error` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcEnvelope {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

/// Classify a raw HTTP outcome into the envelope's `result` or an error.
///
/// Order matters: a non-2xx status wins over body content, a method-level
/// `error` field wins over `result`, and an unparseable body is
/// `MalformedResponse` regardless of what it was meant to carry.
pub fn classify_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::HttpError {
            status,
            body: body.to_string(),
        });
    }
    let envelope: RpcEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    if let Some(err) = envelope.error {
        return Err(ApiError::RpcError {
            code: err.code,
            message: err.message,
        });
    }
    Ok(envelope.result.unwrap_or(Value::Null))
}

/// Truncate a raw body to at most 500 characters for debug logging.
pub fn preview(raw: &str) -> String {
    const LIMIT: usize = 500;
    if raw.chars().count() <= LIMIT {
        return raw.to_string();
    }
    let mut out: String = raw.chars().take(LIMIT).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_version_method_and_params() {
        let req = RpcRequest::new(methods::GET_POST, json!({"post_uuid": "post-1"}));
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.method, "/v1/posts/get");
        assert_eq!(req.params["post_uuid"], "post-1");

        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["method"], "/v1/posts/get");
        assert_eq!(wire["params"]["post_uuid"], "post-1");
    }

    #[test]
    fn each_request_gets_a_fresh_id() {
        let a = RpcRequest::new(methods::FEED, json!({}));
        let b = RpcRequest::new(methods::FEED, json!({}));
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn non_2xx_status_wins_over_body() {
        let err = classify_response(404, r#"{"result": {}}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 404,
                body: r#"{"result": {}}"#.to_string()
            }
        );
    }

    #[test]
    fn unparseable_body_is_malformed_response() {
        let err = classify_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn error_envelope_becomes_rpc_error() {
        let body = r#"{"error": {"code": -32601, "message": "method not found"}}"#;
        let err = classify_response(200, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::RpcError {
                code: -32601,
                message: "method not found".to_string()
            }
        );
    }

    #[test]
    fn success_envelope_yields_result_value() {
        let body = r#"{"result": {"post": {"uuid": "post-1"}}}"#;
        let value = classify_response(200, body).unwrap();
        assert_eq!(value["post"]["uuid"], "post-1");
    }

    #[test]
    fn missing_result_yields_null() {
        assert_eq!(classify_response(200, "{}").unwrap(), Value::Null);
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let long = "x".repeat(1200);
        let short = preview(&long);
        assert_eq!(short.chars().count(), 503);
        assert!(short.ends_with("..."));

        assert_eq!(preview("tiny"), "tiny");
    }
}
