//! Contract deployment configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default gas limit for contract creation transactions.
pub const DEFAULT_DEPLOY_GAS: u64 = 4_700_000;

/// Default interval between receipt lookups, in milliseconds.
pub const DEFAULT_RECEIPT_POLL_MS: u64 = 1_000;

/// Default time to wait for a creation transaction to be mined, in seconds.
pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 300;

/// Deployment settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployConfig {
    /// Gas limit attached to the creation transaction.
    #[serde(default = "default_gas")]
    pub gas: u64,

    /// Interval between `eth_getTransactionReceipt` calls.
    #[serde(default = "default_receipt_poll_ms")]
    pub receipt_poll_ms: u64,

    /// Give up waiting for the receipt after this many seconds.
    #[serde(default = "default_receipt_timeout_secs")]
    pub receipt_timeout_secs: u64,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            gas: DEFAULT_DEPLOY_GAS,
            receipt_poll_ms: DEFAULT_RECEIPT_POLL_MS,
            receipt_timeout_secs: DEFAULT_RECEIPT_TIMEOUT_SECS,
        }
    }
}

impl DeployConfig {
    /// Receipt poll interval as a [`Duration`].
    pub const fn receipt_poll(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_ms)
    }

    /// Receipt timeout as a [`Duration`].
    pub const fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }
}

const fn default_gas() -> u64 {
    DEFAULT_DEPLOY_GAS
}

const fn default_receipt_poll_ms() -> u64 {
    DEFAULT_RECEIPT_POLL_MS
}

const fn default_receipt_timeout_secs() -> u64 {
    DEFAULT_RECEIPT_TIMEOUT_SECS
}
