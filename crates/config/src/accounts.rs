//! Account provisioning and unlocking configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default label prefix; account `i` is labelled `{prefix}{i:02}`.
pub const DEFAULT_LABEL_PREFIX: &str = "Node01Account";

/// Default number of accounts created for a fresh network.
pub const DEFAULT_ACCOUNT_COUNT: usize = 6;

/// Default genesis balances, in wei, by account index.
pub const DEFAULT_BALANCES: [&str; DEFAULT_ACCOUNT_COUNT] = [
    "100000000000000000000",
    "200000000000000000000",
    "300000000000000000000",
    "100000000000000000000",
    "100000000000000000000",
    "100000000000000000000",
];

/// Default unlock duration. Zero keeps the account unlocked until the node exits.
pub const DEFAULT_UNLOCK_DURATION_SECS: u64 = 0;

/// Account settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountsConfig {
    /// Prefix of the per-account label.
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,

    /// Number of accounts to create.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Genesis balances in wei (decimal strings). The last entry repeats when
    /// `count` is larger than the list.
    #[serde(default = "default_balances")]
    pub balances: Vec<String>,

    /// Shared passphrase. When unset the account label is the passphrase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Seconds an unlocked account stays unlocked.
    #[serde(default = "default_unlock_duration_secs")]
    pub unlock_duration_secs: u64,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            count: DEFAULT_ACCOUNT_COUNT,
            balances: default_balances(),
            password: None,
            unlock_duration_secs: DEFAULT_UNLOCK_DURATION_SECS,
        }
    }
}

impl AccountsConfig {
    /// Label of the account at `index`, e.g. `Node01Account03`.
    pub fn label(&self, index: usize) -> String {
        format!("{}{index:02}", self.label_prefix)
    }

    /// Passphrase protecting the account at `index`.
    pub fn passphrase(&self, index: usize) -> String {
        self.password.clone().unwrap_or_else(|| self.label(index))
    }

    /// Genesis balance of the account at `index`.
    pub fn balance(&self, index: usize) -> Option<&str> {
        self.balances.get(index).or_else(|| self.balances.last()).map(String::as_str)
    }

    /// Reject settings that cannot produce a genesis allocation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::Invalid {
                field: "accounts.count",
                reason: "at least one account is required".to_string(),
            });
        }
        if self.balances.is_empty() {
            return Err(ConfigError::Invalid {
                field: "accounts.balances",
                reason: "at least one balance is required".to_string(),
            });
        }
        let is_decimal = |b: &&String| !b.is_empty() && b.bytes().all(|c| c.is_ascii_digit());
        if let Some(bad) = self.balances.iter().find(|b| !is_decimal(b)) {
            return Err(ConfigError::Invalid {
                field: "accounts.balances",
                reason: format!("`{bad}` is not a decimal wei amount"),
            });
        }
        Ok(())
    }
}

fn default_label_prefix() -> String {
    DEFAULT_LABEL_PREFIX.to_string()
}

const fn default_count() -> usize {
    DEFAULT_ACCOUNT_COUNT
}

fn default_balances() -> Vec<String> {
    DEFAULT_BALANCES.iter().map(|b| (*b).to_string()).collect()
}

const fn default_unlock_duration_secs() -> u64 {
    DEFAULT_UNLOCK_DURATION_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_zero_padded() {
        let config = AccountsConfig::default();
        assert_eq!(config.label(0), "Node01Account00");
        assert_eq!(config.label(5), "Node01Account05");
        assert_eq!(config.label(12), "Node01Account12");
    }

    #[test]
    fn passphrase_falls_back_to_label() {
        let mut config = AccountsConfig::default();
        assert_eq!(config.passphrase(2), "Node01Account02");
        config.password = Some("secret".to_string());
        assert_eq!(config.passphrase(2), "secret");
    }

    #[test]
    fn balance_repeats_last_entry() {
        let config = AccountsConfig::default();
        assert_eq!(config.balance(1), Some("200000000000000000000"));
        assert_eq!(config.balance(2), Some("300000000000000000000"));
        assert_eq!(config.balance(9), Some("100000000000000000000"));
    }

    #[test]
    fn validate_rejects_bad_balances() {
        let mut config = AccountsConfig::default();
        assert!(config.validate().is_ok());

        config.balances = vec!["0x10".to_string()];
        assert!(config.validate().is_err());

        config.balances.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_accounts() {
        let config = AccountsConfig { count: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "accounts.count", .. })));
    }
}
