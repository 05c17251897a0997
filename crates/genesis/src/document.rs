//! Serde model of the genesis document.

use alloy_primitives::{Address, U256};
use privnet_config::GenesisConfig;
use serde::{Deserialize, Serialize};

use crate::GenesisError;

/// A funded genesis account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Initial balance in wei, written as a decimal string.
    #[serde(with = "decimal")]
    pub balance: U256,
}

/// Genesis document: header fields followed by the `alloc` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genesis {
    /// Header fields, emitted verbatim.
    #[serde(flatten)]
    pub header: GenesisConfig,

    /// Funded accounts in insertion order.
    #[serde(with = "alloc_map")]
    pub alloc: Vec<(Address, GenesisAccount)>,
}

impl Genesis {
    /// Empty genesis with the given header.
    pub const fn new(header: GenesisConfig) -> Self {
        Self { header, alloc: Vec::new() }
    }

    /// Fund `address` with `balance`, replacing an earlier entry for the same address.
    #[must_use]
    pub fn with_alloc(mut self, address: Address, balance: U256) -> Self {
        self.push_alloc(address, balance);
        self
    }

    /// In-place form of [`Genesis::with_alloc`].
    pub fn push_alloc(&mut self, address: Address, balance: U256) {
        match self.alloc.iter_mut().find(|(a, _)| *a == address) {
            Some((_, account)) => account.balance = balance,
            None => self.alloc.push((address, GenesisAccount { balance })),
        }
    }

    /// Balance allocated to `address`, if any.
    pub fn balance_of(&self, address: &Address) -> Option<U256> {
        self.alloc.iter().find(|(a, _)| a == address).map(|(_, account)| account.balance)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, GenesisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a genesis document.
    pub fn from_json(s: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(s)?)
    }
}

mod decimal {
    use std::str::FromStr;

    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_str(&s).map_err(serde::de::Error::custom)
    }
}

mod alloc_map {
    use std::{fmt, str::FromStr};

    use alloy_primitives::{Address, hex};
    use serde::{
        Deserializer, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };

    use super::GenesisAccount;

    pub(super) fn serialize<S>(
        alloc: &[(Address, GenesisAccount)],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(alloc.len()))?;
        for (address, account) in alloc {
            map.serialize_entry(&hex::encode_prefixed(address), account)?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Vec<(Address, GenesisAccount)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AllocVisitor)
    }

    struct AllocVisitor;

    impl<'de> Visitor<'de> for AllocVisitor {
        type Value = Vec<(Address, GenesisAccount)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from account address to allocation")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut alloc = Vec::with_capacity(access.size_hint().unwrap_or_default());
            while let Some((key, account)) = access.next_entry::<String, GenesisAccount>()? {
                let address = Address::from_str(&key).map_err(serde::de::Error::custom)?;
                alloc.push((address, account));
            }
            Ok(alloc)
        }
    }
}
