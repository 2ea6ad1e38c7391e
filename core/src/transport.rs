//! Single remote-call primitive.
//!
//! # Design
//! One kind of outbound call: POST a JSON-RPC envelope to the configured
//! base URL, wait at most the configured timeout, read the body as text
//! first (diagnostics), then classify via [`crate::rpc::classify_response`].
//! Exactly one attempt per call — no retries at this layer. Each call is
//! self-contained: fresh request id, fresh timeout, no state carried
//! between calls.

use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::error::ApiError;
use crate::rpc::{self, RpcRequest};

/// Issues JSON-RPC calls against one fixed base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    origin: String,
    timeout: Duration,
}

impl Transport {
    pub fn new(config: &Config) -> Self {
        Transport {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            origin: config.origin.clone(),
            timeout: config.request_timeout,
        }
    }

    /// Perform one call and return the envelope's `result`, untyped.
    /// The facade imposes the per-method shape.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, ApiError> {
        let request = RpcRequest::new(method, params);
        tracing::debug!(method, params = %request.params, id = %request.id, "api request");

        let response = self
            .http
            .post(&self.base_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(ORIGIN, &self.origin)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_reqwest_error)?;
        tracing::debug!(method, status, body = %rpc::preview(&body), "api response");

        rpc::classify_response(status, &body)
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}
