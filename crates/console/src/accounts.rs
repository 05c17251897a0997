//! Keystore preparation.

use alloy_primitives::Address;
use privnet_config::AccountsConfig;
use privnet_genesis::AccountPlan;
use tracing::{debug, info, warn};

use crate::{ConsoleError, NodeConsole};

/// Create every planned account on the node, returning the addresses in plan
/// order.
pub async fn provision_accounts<C>(
    console: &C,
    plan: &AccountPlan,
) -> Result<Vec<Address>, ConsoleError>
where
    C: NodeConsole + ?Sized,
{
    let mut created = Vec::with_capacity(plan.len());
    for account in plan.accounts() {
        let address = console.new_account(&account.passphrase).await?;
        info!(label = %account.label, %address, "Created account");
        created.push(address);
    }
    Ok(created)
}

/// Unlock every account held by the node, returning them in node order.
///
/// Account `i` is unlocked with the `i`-th passphrase of `config`. A refusal
/// is logged and the remaining accounts are still tried.
pub async fn unlock_all<C>(
    console: &C,
    config: &AccountsConfig,
) -> Result<Vec<Address>, ConsoleError>
where
    C: NodeConsole + ?Sized,
{
    let accounts = console.accounts().await?;
    for (index, address) in accounts.iter().enumerate() {
        let passphrase = config.passphrase(index);
        match console.unlock_account(*address, &passphrase, config.unlock_duration_secs).await {
            Ok(true) => debug!(index, %address, "Unlocked account"),
            Ok(false) => warn!(index, %address, "Node refused to unlock account"),
            Err(err) => warn!(index, %address, error = %err, "Failed to unlock account"),
        }
    }
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use privnet_config::WatchMode;

    use super::*;
    use crate::test_utils::{MockNode, account_address, console_for};

    #[tokio::test]
    async fn provisions_planned_accounts_in_order() {
        let node = MockNode::new();
        let (_handle, addr) = node.start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let plan = AccountPlan::from_config(&AccountsConfig::default()).unwrap();
        let created = provision_accounts(&console, &plan).await.unwrap();

        let expected: Vec<_> = (0..6).map(account_address).collect();
        assert_eq!(created, expected);
        assert_eq!(console.accounts().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn provisioned_accounts_unlock_with_their_labels() {
        let node = MockNode::new();
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let config = AccountsConfig::default();
        let plan = AccountPlan::from_config(&config).unwrap();
        let created = provision_accounts(&console, &plan).await.unwrap();

        let unlocked = unlock_all(&console, &config).await.unwrap();
        assert_eq!(unlocked, created);
        assert_eq!(node.unlocked(), created);
    }

    #[tokio::test]
    async fn unlock_failures_do_not_stop_the_rest() {
        let node = MockNode::with_accounts(3);
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let config = AccountsConfig { password: Some("shared".to_string()), ..Default::default() };
        let accounts = unlock_all(&console, &config).await.unwrap();

        assert_eq!(accounts.len(), 3);
        assert!(node.unlocked().is_empty());
    }

    #[tokio::test]
    async fn unreachable_node_fails_provisioning() {
        let console = console_for("127.0.0.1:1".parse().unwrap(), WatchMode::Subscribe);
        let plan = AccountPlan::from_config(&AccountsConfig::default()).unwrap();
        let err = provision_accounts(&console, &plan).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Rpc(_)));
    }
}
