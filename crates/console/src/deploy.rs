//! Contract creation and attachment.

use std::time::Duration;

use alloy_primitives::{Address, B256, hex};
use privnet_config::{AccountsConfig, DeployConfig};
use privnet_contracts::{Artifact, Role, WatchSet, address_hex};
use tracing::{debug, info, trace};

use crate::{ConsoleError, NodeConsole, TransactionReceipt, TransactionRequest, unlock_all};

/// A catalog contract at a known address.
#[derive(Debug, Clone, Copy)]
pub struct ContractHandle {
    /// The contract's catalog entry.
    pub artifact: &'static Artifact,
    /// Deployed address.
    pub address: Address,
    /// Creation transaction, when the contract was deployed by this tool.
    pub transaction_hash: Option<B256>,
}

impl ContractHandle {
    /// Catalog name of the contract.
    pub const fn name(&self) -> &'static str {
        self.artifact.name
    }

    /// Watches the contract registers for `role`.
    pub fn watches(&self, role: Role) -> Result<WatchSet, ConsoleError> {
        Ok(self.artifact.watches(role)?)
    }

    /// `Contract mined! address: .. transactionHash: ..`, for deployed contracts.
    pub fn mined_message(&self) -> Option<String> {
        self.transaction_hash.map(|hash| {
            format!(
                "Contract mined! address: {} transactionHash: {}",
                address_hex(&self.address),
                hex::encode_prefixed(hash)
            )
        })
    }
}

/// Handle for `artifact` already deployed at `address`.
pub const fn attach(artifact: &'static Artifact, address: Address) -> ContractHandle {
    ContractHandle { artifact, address, transaction_hash: None }
}

/// Deploy `artifact` and wait until it is mined.
///
/// Every node account is unlocked first. The creation transaction is sent
/// from the artifact's sender account with the configured gas limit.
pub async fn deploy<C>(
    console: &C,
    artifact: &'static Artifact,
    accounts: &AccountsConfig,
    config: &DeployConfig,
) -> Result<ContractHandle, ConsoleError>
where
    C: NodeConsole + ?Sized,
{
    let nodes = unlock_all(console, accounts).await?;
    let sender = artifact.sender(&nodes)?;
    let input = artifact.creation_input(&nodes)?;

    let request = TransactionRequest::create(sender, input, config.gas);
    let hash = console.send_transaction(request).await?;
    info!(contract = artifact.name, %sender, tx = %hash, "Sent creation transaction");

    let receipt =
        wait_for_receipt(console, hash, config.receipt_poll(), config.receipt_timeout()).await?;
    if receipt.is_failure() {
        return Err(ConsoleError::Reverted(hash));
    }
    let address = receipt.contract_address.ok_or(ConsoleError::NoContractAddress(hash))?;
    debug!(contract = artifact.name, %address, block = ?receipt.block_number, "Contract mined");

    Ok(ContractHandle { artifact, address, transaction_hash: Some(hash) })
}

/// Poll for the receipt of `hash` every `poll` until it shows up or `timeout`
/// elapses.
pub async fn wait_for_receipt<C>(
    console: &C,
    hash: B256,
    poll: Duration,
    timeout: Duration,
) -> Result<TransactionReceipt, ConsoleError>
where
    C: NodeConsole + ?Sized,
{
    tokio::time::timeout(timeout, poll_receipt(console, hash, poll))
        .await
        .map_err(|_| ConsoleError::Timeout { hash, after: timeout })?
}

async fn poll_receipt<C>(
    console: &C,
    hash: B256,
    poll: Duration,
) -> Result<TransactionReceipt, ConsoleError>
where
    C: NodeConsole + ?Sized,
{
    loop {
        if let Some(receipt) = console.transaction_receipt(hash).await? {
            return Ok(receipt);
        }
        trace!(tx = %hash, "Receipt not available yet");
        tokio::time::sleep(poll).await;
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U64;
    use privnet_config::WatchMode;
    use privnet_contracts::artifact;

    use super::*;
    use crate::test_utils::{CONTRACT_ADDRESS, MockNode, account_address, console_for};

    fn fast() -> DeployConfig {
        DeployConfig { receipt_poll_ms: 10, receipt_timeout_secs: 2, ..Default::default() }
    }

    #[tokio::test]
    async fn deploys_from_first_account_with_default_gas() {
        let node = MockNode::with_accounts(6).with_receipt_delay(2);
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let marketplace = artifact("marketplace").unwrap();
        let handle = deploy(&console, marketplace, &AccountsConfig::default(), &fast())
            .await
            .unwrap();

        assert_eq!(handle.address, CONTRACT_ADDRESS);
        assert_eq!(handle.name(), "marketplace");
        assert_eq!(node.unlocked().len(), 6);

        let sent = node.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, account_address(0));
        assert_eq!(sent[0].to, None);
        assert_eq!(sent[0].gas, Some(U64::from(4_700_000)));
        assert_eq!(sent[0].data, marketplace.bytecode().unwrap());

        let message = handle.mined_message().unwrap();
        assert!(message.starts_with(
            "Contract mined! address: 0xc0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0 transactionHash: 0x"
        ));
    }

    #[tokio::test]
    async fn constructor_account_is_appended() {
        let node = MockNode::with_accounts(2);
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let receive = artifact("receive-ether").unwrap();
        deploy(&console, receive, &AccountsConfig::default(), &fast()).await.unwrap();

        let sent = node.sent();
        assert_eq!(sent[0].from, account_address(1));
        let code = receive.bytecode().unwrap();
        assert_eq!(sent[0].data.len(), code.len() + 32);
        assert_eq!(&sent[0].data[sent[0].data.len() - 20..], account_address(1).as_slice());
    }

    #[tokio::test]
    async fn missing_sender_account_fails_before_sending() {
        let node = MockNode::with_accounts(1);
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let receive = artifact("receive-ether").unwrap();
        let err = deploy(&console, receive, &AccountsConfig::default(), &fast()).await.unwrap_err();
        assert!(matches!(err, ConsoleError::MissingAccount(1)));
        assert!(node.sent().is_empty());
    }

    #[tokio::test]
    async fn locked_sender_is_rejected_by_the_node() {
        let node = MockNode::with_accounts(1);
        let (_handle, addr) = node.start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let accounts = AccountsConfig { password: Some("wrong".to_string()), ..Default::default() };
        let marketplace = artifact("marketplace").unwrap();
        let err = deploy(&console, marketplace, &accounts, &fast()).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Rpc(_)));
    }

    #[tokio::test]
    async fn receipt_wait_times_out() {
        let node = MockNode::new();
        let (_handle, addr) = node.start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let hash = B256::repeat_byte(0x01);
        let poll = Duration::from_millis(10);
        let err = wait_for_receipt(&console, hash, poll, Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Timeout { hash: h, .. } if h == hash));
    }

    #[test]
    fn attached_contract_has_no_mined_message() {
        let handle = attach(artifact("simple-bidding").unwrap(), Address::repeat_byte(0x42));
        assert!(handle.transaction_hash.is_none());
        assert!(handle.mined_message().is_none());
        assert_eq!(handle.watches(Role::Deployer).unwrap().watches().len(), 5);
        assert!(handle.watches(Role::Vendor).is_err());
    }
}
