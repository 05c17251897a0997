#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod accounts;
pub use accounts::{provision_accounts, unlock_all};

mod api;
pub use api::{
    EthApiClient, EthApiServer, EthPubSubApiClient, EthPubSubApiServer, PersonalApiClient,
    PersonalApiServer,
};

mod client;
pub use client::RpcConsole;

mod console;
pub use console::{LogStream, NodeConsole};

mod deploy;
pub use deploy::{ContractHandle, attach, deploy, wait_for_receipt};

mod error;
pub use error::{ConsoleError, StreamCloseReason};

mod types;
pub use types::{FilterId, LogFilter, RpcLog, TransactionReceipt, TransactionRequest};

mod watcher;
pub use watcher::{WatchSummary, run_watches};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
