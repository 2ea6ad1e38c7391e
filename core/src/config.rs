//! Client configuration.
//!
//! One immutable value passed to [`crate::FeedClient::new`]; nothing here is
//! ambient global state, so tests can run several differently-configured
//! clients in one process. All settings have defaults matching the hosted
//! deployment.

use std::time::Duration;

/// Default remote endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.twocents.money";

/// Default `Origin` header sent with every call.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Immutable client configuration, read once at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every JSON-RPC POST is sent to.
    pub base_url: String,

    /// Value of the `Origin` header declared on each request.
    pub origin: String,

    /// How long a single in-flight request may take before it is aborted
    /// and reported as [`crate::ApiError::Timeout`].
    pub request_timeout: Duration,

    /// Substitute mock data when a transport call fails.
    pub mock_fallback: bool,

    /// Skip the transport entirely and always serve mock data. Useful for
    /// demos and offline operation.
    pub mock_only: bool,

    /// Artificial latency added to every mock response. Pure scheduling
    /// courtesy; carries no semantic meaning.
    pub mock_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            request_timeout: Duration::from_millis(3000),
            mock_fallback: true,
            mock_only: false,
            mock_delay: Duration::from_millis(100),
        }
    }
}
