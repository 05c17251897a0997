//! Event watch configuration.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

/// Default filter polling interval, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// How contract logs are pulled from the node.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    /// `eth_subscribe("logs")` over WebSocket.
    #[default]
    Subscribe,
    /// `eth_newFilter` + `eth_getFilterChanges` over HTTP.
    Poll,
}

impl fmt::Display for WatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subscribe => f.write_str("subscribe"),
            Self::Poll => f.write_str("poll"),
        }
    }
}

impl FromStr for WatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subscribe" | "ws" => Ok(Self::Subscribe),
            "poll" | "filter" => Ok(Self::Poll),
            other => Err(format!("unknown watch mode `{other}` (expected `subscribe` or `poll`)")),
        }
    }
}

/// Event watch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchConfig {
    /// Log delivery mechanism.
    #[serde(default)]
    pub mode: WatchMode,

    /// Interval between `eth_getFilterChanges` calls in [`WatchMode::Poll`].
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { mode: WatchMode::default(), poll_interval_ms: DEFAULT_POLL_INTERVAL_MS }
    }
}

impl WatchConfig {
    /// Poll interval as a [`Duration`].
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

const fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}
