//! Static interface descriptors.

/// Callable functions and emitted events of a contract, as canonical signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interface {
    /// Contract name.
    pub name: &'static str,
    /// Function signatures, e.g. `requestAsset(uint256)`.
    pub functions: &'static [&'static str],
    /// Event signatures, e.g. `AssetShipped(uint256,uint256)`.
    pub events: &'static [&'static str],
}

