//! Contract catalog error types.

use alloy_primitives::hex::FromHexError;

/// Errors raised by the contract catalog and event decoding.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// No artifact with this name.
    #[error("unknown contract `{0}`")]
    UnknownContract(String),

    /// The artifact has no watch list for the requested role.
    #[error("contract `{contract}` has no `{role}` role")]
    UnknownRole {
        /// Artifact name.
        contract: &'static str,
        /// Requested role.
        role: crate::Role,
    },

    /// The node does not expose the account index the artifact needs.
    #[error("node account #{0} is not available")]
    MissingAccount(usize),

    /// The embedded bytecode is not valid hex.
    #[error("invalid bytecode for `{contract}`: {source}")]
    Bytecode {
        /// Artifact name.
        contract: &'static str,
        /// Hex decoding failure.
        source: FromHexError,
    },

    /// A log could not be decoded as the event its topic announced.
    #[error("failed to decode `{event}`: {source}")]
    Decode {
        /// Event name.
        event: &'static str,
        /// ABI decoding failure.
        source: alloy_sol_types::Error,
    },
}
