//! Genesis error types.

/// Errors raised while building or (de)serializing a genesis document.
#[derive(Debug, thiserror::Error)]
pub enum GenesisError {
    /// A configured balance is not a valid wei amount.
    #[error("invalid balance `{value}` for account {index}")]
    InvalidBalance {
        /// Account index the balance belongs to.
        index: usize,
        /// The rejected value.
        value: String,
    },

    /// No balance is configured for an account.
    #[error("no balance configured for account {0}")]
    MissingBalance(usize),

    /// The number of addresses does not match the plan.
    #[error("expected {expected} account addresses, got {actual}")]
    AccountCountMismatch {
        /// Accounts in the plan.
        expected: usize,
        /// Addresses supplied.
        actual: usize,
    },

    /// JSON encoding or decoding failed.
    #[error("genesis json: {0}")]
    Json(#[from] serde_json::Error),
}
