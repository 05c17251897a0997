#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod accounts;
pub use accounts::{
    AccountsConfig, DEFAULT_ACCOUNT_COUNT, DEFAULT_BALANCES, DEFAULT_LABEL_PREFIX,
    DEFAULT_UNLOCK_DURATION_SECS,
};

mod deploy;
pub use deploy::{
    DEFAULT_DEPLOY_GAS, DEFAULT_RECEIPT_POLL_MS, DEFAULT_RECEIPT_TIMEOUT_SECS, DeployConfig,
};

mod error;
pub use error::ConfigError;

mod genesis;
pub use genesis::{
    DEFAULT_COINBASE, DEFAULT_DIFFICULTY, DEFAULT_EXTRA_DATA, DEFAULT_GAS_LIMIT, DEFAULT_MIXHASH,
    DEFAULT_NONCE, DEFAULT_PARENT_HASH, DEFAULT_TIMESTAMP, GenesisConfig,
};

mod rpc;
pub use rpc::{DEFAULT_HTTP_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WS_URL, RpcConfig};

mod tool;
pub use tool::ToolConfig;

mod watch;
pub use watch::{DEFAULT_POLL_INTERVAL_MS, WatchConfig, WatchMode};
