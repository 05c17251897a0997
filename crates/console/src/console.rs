//! The node console surface.

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::{ConsoleError, RpcLog, TransactionReceipt, TransactionRequest};

/// Logs of one contract, in delivery order. Errors are per item; the stream
/// keeps going after them, except [`ConsoleError::StreamClosed`], which is
/// the last item.
pub type LogStream = BoxStream<'static, Result<RpcLog, ConsoleError>>;

/// What the tool needs from a running node.
#[async_trait]
pub trait NodeConsole: Send + Sync {
    /// Accounts held by the node, in creation order.
    async fn accounts(&self) -> Result<Vec<Address>, ConsoleError>;

    /// Create an account protected by `passphrase`.
    async fn new_account(&self, passphrase: &str) -> Result<Address, ConsoleError>;

    /// Unlock `address` for `duration_secs` seconds.
    async fn unlock_account(
        &self,
        address: Address,
        passphrase: &str,
        duration_secs: u64,
    ) -> Result<bool, ConsoleError>;

    /// Submit a transaction signed by the node.
    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, ConsoleError>;

    /// Receipt of `hash`, `None` while pending.
    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ConsoleError>;

    /// Logs emitted by `address` whose first topic is one of `events`; every
    /// log of the contract when `events` is empty.
    async fn watch_logs(&self, address: Address, events: &[B256])
    -> Result<LogStream, ConsoleError>;
}
