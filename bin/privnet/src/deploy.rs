//! `deploy` and `attach`.

use std::future::Future;

use alloy_primitives::Address;
use privnet_config::ToolConfig;
use privnet_console::{ContractHandle, RpcConsole, WatchSummary, run_watches};
use privnet_contracts::{Role, artifact};

/// Deploy `name`, print where it was mined, then watch the deployer's events
/// until Ctrl-C.
pub(crate) async fn deploy(config: ToolConfig, name: &str) -> eyre::Result<()> {
    deploy_with(config, name, |line| println!("{line}"), ctrl_c()).await.map(|_| ())
}

/// Watch `name` at `address` from `role` until Ctrl-C.
pub(crate) async fn attach(
    config: ToolConfig,
    name: &str,
    address: Address,
    role: Role,
) -> eyre::Result<()> {
    attach_with(config, name, address, role, |line| println!("{line}"), ctrl_c()).await.map(|_| ())
}

async fn deploy_with<O, S>(
    config: ToolConfig,
    name: &str,
    mut out: O,
    shutdown: S,
) -> eyre::Result<WatchSummary>
where
    O: FnMut(String),
    S: Future<Output = ()>,
{
    let artifact = artifact(name)?;
    let console = RpcConsole::new(config.rpc, config.watch)?;

    let handle =
        privnet_console::deploy(&console, artifact, &config.accounts, &config.deploy).await?;
    if let Some(message) = handle.mined_message() {
        out(message);
    }

    watch(&console, &handle, Role::Deployer, out, shutdown).await
}

async fn attach_with<O, S>(
    config: ToolConfig,
    name: &str,
    address: Address,
    role: Role,
    out: O,
    shutdown: S,
) -> eyre::Result<WatchSummary>
where
    O: FnMut(String),
    S: Future<Output = ()>,
{
    let artifact = artifact(name)?;
    let console = RpcConsole::new(config.rpc, config.watch)?;

    let handle = privnet_console::attach(artifact, address);
    tracing::info!(contract = name, %address, %role, "Attached to contract");

    watch(&console, &handle, role, out, shutdown).await
}

async fn watch<O, S>(
    console: &RpcConsole,
    handle: &ContractHandle,
    role: Role,
    mut out: O,
    shutdown: S,
) -> eyre::Result<WatchSummary>
where
    O: FnMut(String),
    S: Future<Output = ()>,
{
    let watches = handle.watches(role)?;
    let summary =
        run_watches(console, handle, &watches, |message| out(message.line), shutdown).await?;
    tracing::info!(
        delivered = summary.delivered,
        skipped = summary.skipped,
        failed = summary.failed,
        "Stopped watching"
    );
    Ok(summary)
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
