//! Contains the CLI for `privnet`.

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};
use privnet_config::{ToolConfig, WatchMode};
use privnet_contracts::Role;

use crate::{accounts, catalog, deploy};

/// CLI arguments for privnet.
#[derive(Parser, Debug)]
#[command(name = "privnet")]
#[command(about = "Provision accounts, deploy contracts and watch their events on a private network")]
pub(crate) struct Cli {
    /// Path to the configuration file (TOML or JSON).
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the node's HTTP JSON-RPC endpoint.
    #[arg(long, env = "PRIVNET_HTTP_URL", global = true)]
    pub http_url: Option<String>,

    /// Override the node's WebSocket JSON-RPC endpoint.
    #[arg(long, env = "PRIVNET_WS_URL", global = true)]
    pub ws_url: Option<String>,

    /// Override how logs are pulled: `subscribe` or `poll`.
    #[arg(long, global = true)]
    pub watch_mode: Option<WatchMode>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create the network's accounts on the node and print the genesis document
    CreateAccounts(OutputArgs),
    /// Print the genesis document funding existing accounts
    Genesis(GenesisArgs),
    /// Deploy a catalog contract and watch its events
    Deploy(DeployArgs),
    /// Watch the events of an already deployed catalog contract
    Attach(AttachArgs),
    /// List the contract catalog
    Contracts,
}

#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Also write the genesis JSON to this file.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct GenesisArgs {
    /// Funded addresses, in account order.
    #[arg(long = "account", value_name = "ADDRESS", required = true, num_args = 1..)]
    pub accounts: Vec<Address>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct DeployArgs {
    /// Catalog name of the contract.
    pub contract: String,
}

#[derive(Args, Debug)]
pub(crate) struct AttachArgs {
    /// Catalog name of the contract.
    pub contract: String,

    /// Address the contract is deployed at.
    #[arg(long)]
    pub address: Address,

    /// Whose events to watch: `deployer`, `client` or `vendor`.
    #[arg(long, default_value_t = Role::Deployer)]
    pub role: Role,
}

impl Cli {
    /// Load the configuration, applying CLI overrides.
    pub(crate) fn load_config(&self) -> eyre::Result<ToolConfig> {
        let mut config = ToolConfig::load(self.config.as_deref())?;

        if let Some(ref url) = self.http_url {
            config.rpc.http_url = url.clone();
        }
        if let Some(ref url) = self.ws_url {
            config.rpc.ws_url = url.clone();
        }
        if let Some(mode) = self.watch_mode {
            config.watch.mode = mode;
        }

        Ok(config)
    }

    /// Run the selected subcommand.
    pub(crate) async fn run(self) -> eyre::Result<()> {
        let config = self.load_config()?;
        tracing::debug!(?config, "Loaded configuration");

        match self.command {
            Command::CreateAccounts(args) => accounts::create(&config, args.out.as_deref()).await,
            Command::Genesis(args) => {
                accounts::genesis(&config, &args.accounts, args.output.out.as_deref())
            }
            Command::Deploy(args) => deploy::deploy(config, &args.contract).await,
            Command::Attach(args) => {
                deploy::attach(config, &args.contract, args.address, args.role).await
            }
            Command::Contracts => {
                catalog::print();
                Ok(())
            }
        }
    }
}
