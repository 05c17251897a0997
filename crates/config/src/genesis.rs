//! Genesis header configuration.

use serde::{Deserialize, Serialize};

/// Default genesis nonce.
pub const DEFAULT_NONCE: &str = "0x0000000000000042";

/// Default genesis timestamp.
pub const DEFAULT_TIMESTAMP: &str = "0x0";

/// Default parent hash (all zeroes).
pub const DEFAULT_PARENT_HASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Default extra data.
pub const DEFAULT_EXTRA_DATA: &str = "0x0";

/// Default block gas limit.
pub const DEFAULT_GAS_LIMIT: &str = "0x8000000000";

/// Default difficulty, kept low so a single CPU miner makes progress.
pub const DEFAULT_DIFFICULTY: &str = "0x400";

/// Default mix hash (all zeroes).
pub const DEFAULT_MIXHASH: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Default coinbase.
pub const DEFAULT_COINBASE: &str = "0x3333333333333333333333333333333333333333";

/// Header fields written into the genesis document verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenesisConfig {
    /// Block nonce.
    #[serde(default = "default_nonce")]
    pub nonce: String,

    /// Block timestamp.
    #[serde(default = "default_timestamp")]
    pub timestamp: String,

    /// Parent block hash.
    #[serde(default = "default_parent_hash")]
    pub parent_hash: String,

    /// Extra data.
    #[serde(default = "default_extra_data")]
    pub extra_data: String,

    /// Block gas limit.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: String,

    /// Mining difficulty.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,

    /// Mix hash.
    #[serde(default = "default_mixhash")]
    pub mixhash: String,

    /// Reward beneficiary.
    #[serde(default = "default_coinbase")]
    pub coinbase: String,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            nonce: default_nonce(),
            timestamp: default_timestamp(),
            parent_hash: default_parent_hash(),
            extra_data: default_extra_data(),
            gas_limit: default_gas_limit(),
            difficulty: default_difficulty(),
            mixhash: default_mixhash(),
            coinbase: default_coinbase(),
        }
    }
}

fn default_nonce() -> String {
    DEFAULT_NONCE.to_string()
}

fn default_timestamp() -> String {
    DEFAULT_TIMESTAMP.to_string()
}

fn default_parent_hash() -> String {
    DEFAULT_PARENT_HASH.to_string()
}

fn default_extra_data() -> String {
    DEFAULT_EXTRA_DATA.to_string()
}

fn default_gas_limit() -> String {
    DEFAULT_GAS_LIMIT.to_string()
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

fn default_mixhash() -> String {
    DEFAULT_MIXHASH.to_string()
}

fn default_coinbase() -> String {
    DEFAULT_COINBASE.to_string()
}
