//! Node JSON-RPC namespaces used by the console.
//!
//! Both client and server halves are generated: the client drives a real
//! node, the server lets an in-process node stand in for it.

use alloy_primitives::{Address, B256};
use jsonrpsee::{
    core::{RpcResult, SubscriptionResult},
    proc_macros::rpc,
};

use crate::{FilterId, LogFilter, RpcLog, TransactionReceipt, TransactionRequest};

/// `eth_*` request/response methods.
#[rpc(client, server, namespace = "eth")]
pub trait EthApi {
    /// Accounts held by the node's keystore.
    #[method(name = "accounts")]
    async fn accounts(&self) -> RpcResult<Vec<Address>>;

    /// Sign with an unlocked account and submit.
    #[method(name = "sendTransaction")]
    async fn send_transaction(&self, request: TransactionRequest) -> RpcResult<B256>;

    /// Receipt of a mined transaction.
    #[method(name = "getTransactionReceipt")]
    async fn transaction_receipt(&self, hash: B256) -> RpcResult<Option<TransactionReceipt>>;

    /// Install a log filter.
    #[method(name = "newFilter")]
    async fn new_filter(&self, filter: LogFilter) -> RpcResult<FilterId>;

    /// Logs matched by the filter since the previous call.
    #[method(name = "getFilterChanges")]
    async fn filter_changes(&self, id: FilterId) -> RpcResult<Vec<RpcLog>>;

    /// Remove a log filter.
    #[method(name = "uninstallFilter")]
    async fn uninstall_filter(&self, id: FilterId) -> RpcResult<bool>;
}

/// `eth_subscribe` for contract logs. WebSocket only.
#[rpc(client, server, namespace = "eth")]
pub trait EthPubSubApi {
    /// Subscribe to `kind` notifications, `logs` here.
    #[subscription(name = "subscribe" => "subscription", unsubscribe = "unsubscribe", item = RpcLog)]
    async fn subscribe_logs(&self, kind: String, filter: LogFilter) -> SubscriptionResult;
}

/// `personal_*` keystore methods.
#[rpc(client, server, namespace = "personal")]
pub trait PersonalApi {
    /// Create a key pair protected by `passphrase`.
    #[method(name = "newAccount")]
    async fn new_account(&self, passphrase: String) -> RpcResult<Address>;

    /// Unlock `address` for `duration` seconds; zero means until the node exits.
    #[method(name = "unlockAccount")]
    async fn unlock_account(
        &self,
        address: Address,
        passphrase: String,
        duration: u64,
    ) -> RpcResult<bool>;
}
