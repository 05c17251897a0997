//! Deployable contract catalog.

use alloy_primitives::{Address, Bytes, hex};
use alloy_sol_types::SolValue;

use crate::{
    ContractError, Interface, Role, Watch, WatchSet,
    bidding::{SIMPLE_BIDDING, SIMPLE_BIDDING_LITE, SimpleBidding, SimpleBiddingLite},
    marketplace::{DELIVERY_MARKETPLACE, DeliveryMarketPlace, MARKETPLACE, MarketPlace},
    receive_ether::{RECEIVE_ETHER, RECEIVE_ETHER_WITH_LOG, ReceiveEtherWithLog},
    reputation::REPUTATION_SYSTEM,
};

/// Constructor arguments appended to the creation bytecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constructor {
    /// No arguments.
    Empty,
    /// A single `address` argument bound to the node account at this index.
    Account(usize),
}

/// Watch list of one role.
#[derive(Debug, Clone, Copy)]
pub struct RoleWatches {
    /// The role.
    pub role: Role,
    /// Events watched from that role, in registration order.
    pub watches: &'static [Watch],
}

/// A precompiled contract the tool can deploy or attach to.
#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    /// Catalog name used on the command line.
    pub name: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Functions and events of the contract.
    pub interface: &'static Interface,
    /// Index of the node account sending the creation transaction.
    pub sender: usize,
    /// Constructor argument policy.
    pub constructor: Constructor,
    /// Watch lists per role.
    pub roles: &'static [RoleWatches],
    bytecode: &'static str,
}

impl Artifact {
    /// Creation bytecode.
    pub fn bytecode(&self) -> Result<Bytes, ContractError> {
        hex::decode(self.bytecode.trim())
            .map(Bytes::from)
            .map_err(|source| ContractError::Bytecode { contract: self.name, source })
    }

    /// Account sending the creation transaction, picked from the node's accounts.
    pub fn sender(&self, accounts: &[Address]) -> Result<Address, ContractError> {
        accounts.get(self.sender).copied().ok_or(ContractError::MissingAccount(self.sender))
    }

    /// Creation bytecode followed by the ABI encoded constructor arguments.
    pub fn creation_input(&self, accounts: &[Address]) -> Result<Bytes, ContractError> {
        let mut input = self.bytecode()?.to_vec();
        match self.constructor {
            Constructor::Empty => {}
            Constructor::Account(index) => {
                let account = accounts.get(index).ok_or(ContractError::MissingAccount(index))?;
                input.extend_from_slice(&account.abi_encode());
            }
        }
        Ok(input.into())
    }

    /// Watches for `role`.
    pub fn watches(&self, role: Role) -> Result<WatchSet, ContractError> {
        self.roles
            .iter()
            .find(|r| r.role == role)
            .map(|r| WatchSet::new(r.watches.iter().copied()))
            .ok_or(ContractError::UnknownRole { contract: self.name, role })
    }
}

const MARKETPLACE_VENDOR: &[Watch] = &[
    Watch::of::<MarketPlace::VendorRegistered>(),
    Watch::of::<MarketPlace::AssetRequested>(),
    Watch::of::<MarketPlace::PriceProposed>(),
    Watch::of::<MarketPlace::BiddingFinished>(),
];

const MARKETPLACE_CLIENT: &[Watch] = &[
    Watch::of::<MarketPlace::BiddingFinished>(),
    Watch::of::<MarketPlace::PaymentReceived>(),
    Watch::of::<MarketPlace::AssetShipped>(),
];

const MARKETPLACE_ALL: &[Watch] = &[
    Watch::of::<MarketPlace::VendorRegistered>(),
    Watch::of::<MarketPlace::AssetRequested>(),
    Watch::of::<MarketPlace::PriceProposed>(),
    Watch::of::<MarketPlace::BiddingFinished>(),
    Watch::of::<MarketPlace::PaymentReceived>(),
    Watch::of::<MarketPlace::AssetShipped>(),
];

const DELIVERY_VENDOR: &[Watch] = &[
    Watch::of::<DeliveryMarketPlace::VendorRegistered>(),
    Watch::of::<DeliveryMarketPlace::AssetRequested>(),
    Watch::of::<DeliveryMarketPlace::PriceProposed>(),
    Watch::of::<DeliveryMarketPlace::BiddingFinished>(),
];

const DELIVERY_ALL: &[Watch] = &[
    Watch::of::<DeliveryMarketPlace::VendorRegistered>(),
    Watch::of::<DeliveryMarketPlace::AssetRequested>(),
    Watch::of::<DeliveryMarketPlace::PriceProposed>(),
    Watch::of::<DeliveryMarketPlace::BiddingFinished>(),
    Watch::of::<DeliveryMarketPlace::PaymentReceived>(),
    Watch::of::<DeliveryMarketPlace::AssetShipped>(),
];

const SIMPLE_BIDDING_ALL: &[Watch] = &[
    Watch::of::<SimpleBidding::AssetRequested>(),
    Watch::of::<SimpleBidding::PriceProposed>(),
    Watch::of::<SimpleBidding::BiddingFinished>(),
    Watch::of::<SimpleBidding::PaymentReceived>(),
    Watch::of::<SimpleBidding::AssetShipped>(),
];

const SIMPLE_BIDDING_LITE_ALL: &[Watch] = &[Watch::of::<SimpleBiddingLite::AssetRequested>()];

const RECEIVE_ETHER_LOG_ALL: &[Watch] = &[
    Watch::of::<ReceiveEtherWithLog::EtherReceival>(),
    Watch::of::<ReceiveEtherWithLog::ContractDisposed>(),
];

const SILENT: &[RoleWatches] = &[RoleWatches { role: Role::Deployer, watches: &[] }];

static CATALOG: &[Artifact] = &[
    Artifact {
        name: "receive-ether",
        summary: "forwards received ether to node account #1",
        interface: &RECEIVE_ETHER,
        sender: 1,
        constructor: Constructor::Account(1),
        roles: SILENT,
        bytecode: include_str!("../bytecode/receive_ether.hex"),
    },
    Artifact {
        name: "receive-ether-log",
        summary: "forwards received ether to node account #1 and logs every receipt",
        interface: &RECEIVE_ETHER_WITH_LOG,
        sender: 0,
        constructor: Constructor::Account(1),
        roles: &[RoleWatches { role: Role::Deployer, watches: RECEIVE_ETHER_LOG_ALL }],
        bytecode: include_str!("../bytecode/receive_ether_log.hex"),
    },
    Artifact {
        name: "simple-bidding",
        summary: "asset bidding with vendor validation",
        interface: &SIMPLE_BIDDING,
        sender: 0,
        constructor: Constructor::Empty,
        roles: &[RoleWatches { role: Role::Deployer, watches: SIMPLE_BIDDING_ALL }],
        bytecode: include_str!("../bytecode/simple_bidding.hex"),
    },
    Artifact {
        name: "simple-bidding-lite",
        summary: "asset bidding without vendor registration",
        interface: &SIMPLE_BIDDING_LITE,
        sender: 0,
        constructor: Constructor::Empty,
        roles: &[RoleWatches { role: Role::Deployer, watches: SIMPLE_BIDDING_LITE_ALL }],
        bytecode: include_str!("../bytecode/simple_bidding_lite.hex"),
    },
    Artifact {
        name: "marketplace",
        summary: "vendor registration and asset bidding",
        interface: &MARKETPLACE,
        sender: 0,
        constructor: Constructor::Empty,
        roles: &[
            RoleWatches { role: Role::Deployer, watches: MARKETPLACE_ALL },
            RoleWatches { role: Role::Client, watches: MARKETPLACE_CLIENT },
            RoleWatches { role: Role::Vendor, watches: MARKETPLACE_VENDOR },
        ],
        bytecode: include_str!("../bytecode/marketplace.hex"),
    },
    Artifact {
        name: "marketplace-delivery",
        summary: "marketplace with delivery speed, quantities and offers",
        interface: &DELIVERY_MARKETPLACE,
        sender: 0,
        constructor: Constructor::Empty,
        roles: &[
            RoleWatches { role: Role::Deployer, watches: DELIVERY_ALL },
            RoleWatches { role: Role::Vendor, watches: DELIVERY_VENDOR },
        ],
        bytecode: include_str!("../bytecode/marketplace_delivery.hex"),
    },
    Artifact {
        name: "reputation-system",
        summary: "stakeholder reputation across business processes",
        interface: &REPUTATION_SYSTEM,
        sender: 0,
        constructor: Constructor::Empty,
        roles: SILENT,
        bytecode: include_str!("../bytecode/reputation_system.hex"),
    },
    Artifact {
        name: "reputation-system-alt",
        summary: "alternate build of reputation-system with the same interface",
        interface: &REPUTATION_SYSTEM,
        sender: 0,
        constructor: Constructor::Empty,
        roles: SILENT,
        bytecode: include_str!("../bytecode/reputation_system_alt.hex"),
    },
];

/// Every known artifact.
pub fn catalog() -> &'static [Artifact] {
    CATALOG
}

/// Look an artifact up by name.
pub fn artifact(name: &str) -> Result<&'static Artifact, ContractError> {
    CATALOG
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| ContractError::UnknownContract(name.to_string()))
}
