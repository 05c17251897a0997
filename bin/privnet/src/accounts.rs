//! `create-accounts` and `genesis`.

use std::path::Path;

use alloy_primitives::Address;
use privnet_config::ToolConfig;
use privnet_console::{RpcConsole, provision_accounts};
use privnet_genesis::{AccountPlan, Genesis, render_template};

/// Create the configured accounts on the node and print their genesis.
pub(crate) async fn create(config: &ToolConfig, out: Option<&Path>) -> eyre::Result<()> {
    let plan = AccountPlan::from_config(&config.accounts)?;
    let console = RpcConsole::new(config.rpc.clone(), config.watch.clone())?;

    let addresses = provision_accounts(&console, &plan).await?;
    tracing::info!(count = addresses.len(), "Accounts created");

    let genesis = plan.genesis(config.genesis.clone(), &addresses)?;
    emit(&genesis, out)
}

/// Print the genesis funding `addresses`.
pub(crate) fn genesis(
    config: &ToolConfig,
    addresses: &[Address],
    out: Option<&Path>,
) -> eyre::Result<()> {
    emit(&genesis_for(config, addresses)?, out)
}

/// Genesis funding `addresses` with the configured balances, in order.
fn genesis_for(config: &ToolConfig, addresses: &[Address]) -> eyre::Result<Genesis> {
    let mut accounts = config.accounts.clone();
    accounts.count = addresses.len();
    let plan = AccountPlan::from_config(&accounts)?;
    Ok(plan.genesis(config.genesis.clone(), addresses)?)
}

fn emit(genesis: &Genesis, out: Option<&Path>) -> eyre::Result<()> {
    if let Some(path) = out {
        std::fs::write(path, genesis.to_json_pretty()?)?;
        tracing::info!(path = %path.display(), "Wrote genesis document");
    }
    println!("{}", render_template(genesis)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
    }

    #[test]
    fn genesis_follows_address_order() {
        let addresses: Vec<_> = (1..=3u8).map(Address::repeat_byte).collect();
        let genesis = genesis_for(&ToolConfig::default(), &addresses).unwrap();

        let funded: Vec<_> = genesis.alloc.iter().map(|(a, _)| *a).collect();
        assert_eq!(funded, addresses);
        assert_eq!(genesis.balance_of(&addresses[2]), Some(ether(300)));
    }

    #[test]
    fn extra_addresses_reuse_the_last_balance() {
        let addresses: Vec<_> = (1..=8u8).map(Address::repeat_byte).collect();
        let genesis = genesis_for(&ToolConfig::default(), &addresses).unwrap();
        assert_eq!(genesis.balance_of(&addresses[7]), Some(ether(100)));
    }

    #[test]
    fn writes_genesis_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CustomGenesis.json");
        let addresses = [Address::repeat_byte(0xa1)];

        genesis(&ToolConfig::default(), &addresses, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed = Genesis::from_json(&written).unwrap();
        assert_eq!(parsed.balance_of(&addresses[0]), Some(ether(100)));
    }
}
