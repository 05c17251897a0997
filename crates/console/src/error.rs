//! Console error types.

use std::{fmt, time::Duration};

use alloy_primitives::{Address, B256};
use privnet_config::ConfigError;
use privnet_contracts::ContractError;

/// Errors raised while talking to the node.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The JSON-RPC call failed or the node returned an error.
    #[error("rpc call failed: {0}")]
    Rpc(#[from] jsonrpsee::core::ClientError),

    /// A subscription notification could not be parsed.
    #[error("malformed notification: {0}")]
    Notification(#[from] serde_json::Error),

    /// No receipt arrived in time.
    #[error("transaction {hash} was not mined within {after:?}")]
    Timeout {
        /// Transaction hash.
        hash: B256,
        /// How long the receipt was polled for.
        after: Duration,
    },

    /// The artifact needs a node account the node does not have.
    #[error("node account #{0} is not available")]
    MissingAccount(usize),

    /// The receipt of a creation transaction carries no contract address.
    #[error("transaction {0} did not create a contract")]
    NoContractAddress(B256),

    /// The creation transaction was mined but failed.
    #[error("transaction {0} failed")]
    Reverted(B256),

    /// The artifact's embedded bytecode is not valid hex.
    #[error(transparent)]
    Bytecode(ContractError),

    /// The catalog has no such contract or role, or an event failed to decode.
    #[error(transparent)]
    Contract(ContractError),

    /// The node stopped delivering logs for a contract.
    #[error("log stream of {address} closed: {reason}")]
    StreamClosed {
        /// Watched contract.
        address: Address,
        /// Why delivery stopped.
        reason: StreamCloseReason,
    },

    /// The supplied settings are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<ContractError> for ConsoleError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::MissingAccount(index) => Self::MissingAccount(index),
            err @ ContractError::Bytecode { .. } => Self::Bytecode(err),
            other => Self::Contract(other),
        }
    }
}

/// Why a log stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamCloseReason {
    /// The subscription fell too far behind the node and was dropped.
    Lagged,
    /// The connection to the node was closed.
    ConnectionClosed,
}

impl fmt::Display for StreamCloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lagged => f.write_str("subscription lagged behind the node"),
            Self::ConnectionClosed => f.write_str("connection to the node closed"),
        }
    }
}
