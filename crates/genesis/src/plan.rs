//! Which accounts to create and how much each one receives at genesis.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use privnet_config::{AccountsConfig, GenesisConfig};

use crate::{Genesis, GenesisError};

/// One account to be created on the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAccount {
    /// Human readable label, e.g. `Node01Account00`.
    pub label: String,
    /// Passphrase handed to the node's keystore.
    pub passphrase: String,
    /// Genesis balance in wei.
    pub balance: U256,
}

/// Ordered list of accounts to provision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPlan {
    accounts: Vec<PlannedAccount>,
}

impl AccountPlan {
    /// Build the plan described by the accounts section of the config.
    pub fn from_config(config: &AccountsConfig) -> Result<Self, GenesisError> {
        let accounts = (0..config.count)
            .map(|index| {
                let raw = config.balance(index).ok_or(GenesisError::MissingBalance(index))?;
                let balance = U256::from_str(raw)
                    .map_err(|_| GenesisError::InvalidBalance { index, value: raw.to_string() })?;
                Ok(PlannedAccount {
                    label: config.label(index),
                    passphrase: config.passphrase(index),
                    balance,
                })
            })
            .collect::<Result<_, GenesisError>>()?;
        Ok(Self { accounts })
    }

    /// Planned accounts in creation order.
    pub fn accounts(&self) -> &[PlannedAccount] {
        &self.accounts
    }

    /// Number of planned accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Genesis funding `addresses`, which must be given in plan order.
    pub fn genesis(
        &self,
        header: GenesisConfig,
        addresses: &[Address],
    ) -> Result<Genesis, GenesisError> {
        if addresses.len() != self.accounts.len() {
            return Err(GenesisError::AccountCountMismatch {
                expected: self.accounts.len(),
                actual: addresses.len(),
            });
        }
        let mut genesis = Genesis::new(header);
        for (address, account) in addresses.iter().zip(&self.accounts) {
            genesis.push_alloc(*address, account.balance);
        }
        Ok(genesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_network_layout() {
        let plan = AccountPlan::from_config(&AccountsConfig::default()).unwrap();
        assert_eq!(plan.len(), 6);

        let labels: Vec<_> = plan.accounts().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Node01Account00",
                "Node01Account01",
                "Node01Account02",
                "Node01Account03",
                "Node01Account04",
                "Node01Account05"
            ]
        );

        let ether = U256::from(10u64).pow(U256::from(18u64));
        let balances: Vec<_> = plan.accounts().iter().map(|a| a.balance / ether).collect();
        assert_eq!(balances, [100u64, 200, 300, 100, 100, 100].map(U256::from));
    }

    #[test]
    fn label_is_default_passphrase() {
        let plan = AccountPlan::from_config(&AccountsConfig::default()).unwrap();
        assert!(plan.accounts().iter().all(|a| a.label == a.passphrase));
    }

    #[test]
    fn genesis_requires_one_address_per_account() {
        let config = AccountsConfig { count: 2, ..Default::default() };
        let plan = AccountPlan::from_config(&config).unwrap();

        let err = plan.genesis(GenesisConfig::default(), &[Address::ZERO]).unwrap_err();
        assert!(matches!(err, GenesisError::AccountCountMismatch { expected: 2, actual: 1 }));

        let a = Address::repeat_byte(0x0a);
        let b = Address::repeat_byte(0x0b);
        let genesis = plan.genesis(GenesisConfig::default(), &[a, b]).unwrap();
        assert_eq!(genesis.alloc.iter().map(|(addr, _)| *addr).collect::<Vec<_>>(), [a, b]);
    }

    #[test]
    fn rejects_unparseable_balance() {
        let config = AccountsConfig { balances: vec!["lots".to_string()], ..Default::default() };
        let err = AccountPlan::from_config(&config).unwrap_err();
        assert!(matches!(err, GenesisError::InvalidBalance { index: 0, .. }));
    }
}
