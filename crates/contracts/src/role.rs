//! Who is watching a contract.

use std::{fmt, str::FromStr};

/// Perspective a contract is watched from; each selects a different watch list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// The account that deployed the contract; watches every event.
    #[default]
    Deployer,
    /// A buyer waiting on bidding results, payments and shipping.
    Client,
    /// A seller waiting on registrations, requests and offers.
    Vendor,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Self; 3] = [Self::Deployer, Self::Client, Self::Vendor];

    /// Lowercase name used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deployer => "deployer",
            Self::Client => "client",
            Self::Vendor => "vendor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown role `{s}` (expected deployer, client or vendor)"))
    }
}
