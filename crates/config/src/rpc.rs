//! Node endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default HTTP JSON-RPC endpoint of the node.
pub const DEFAULT_HTTP_URL: &str = "http://127.0.0.1:8545";

/// Default WebSocket JSON-RPC endpoint of the node.
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8546";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcConfig {
    /// HTTP JSON-RPC endpoint, used for plain calls and filter polling.
    #[serde(default = "default_http_url")]
    pub http_url: String,

    /// WebSocket endpoint, used for `eth_subscribe`.
    #[serde(default = "default_ws_url")]
    pub ws_url: String,

    /// Timeout applied to every request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            http_url: DEFAULT_HTTP_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RpcConfig {
    /// Request timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_http_url() -> String {
    DEFAULT_HTTP_URL.to_string()
}

fn default_ws_url() -> String {
    DEFAULT_WS_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
