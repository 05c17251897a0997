//! Operator facing rendering of the genesis document.

use crate::{Genesis, GenesisError};

/// Printed after the document to tell the operator what to do with it.
pub const GENESIS_HINT: &str = "Replace the text above with the text inside \"config/CustomGenesis.json\" and run \"initialize.sh\" again.";

/// The genesis JSON, a blank line, then [`GENESIS_HINT`].
pub fn render_template(genesis: &Genesis) -> Result<String, GenesisError> {
    let json = genesis.to_json_pretty()?;
    Ok(format!("{json}\n\n{GENESIS_HINT}"))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;
    use privnet_config::{AccountsConfig, GenesisConfig};

    use super::*;
    use crate::AccountPlan;

    #[test]
    fn template_document_is_valid_json() {
        let config = AccountsConfig { count: 2, ..Default::default() };
        let plan = AccountPlan::from_config(&config).unwrap();
        let first = Address::repeat_byte(0xa1);
        let second = Address::repeat_byte(0xb2);
        let genesis = plan.genesis(GenesisConfig::default(), &[first, second]).unwrap();

        let rendered = render_template(&genesis).unwrap();
        let (document, hint) = rendered.rsplit_once("\n\n").unwrap();
        assert_eq!(hint, GENESIS_HINT);

        let value: serde_json::Value = serde_json::from_str(document).unwrap();
        let alloc = value["alloc"].as_object().unwrap();
        assert_eq!(alloc.len(), 2);
        assert_eq!(alloc[&format!("0x{}", "a1".repeat(20))]["balance"], "100000000000000000000");
        assert_eq!(alloc[&format!("0x{}", "b2".repeat(20))]["balance"], "200000000000000000000");
        assert_eq!(value["gasLimit"], "0x8000000000");
        assert_eq!(value["difficulty"], "0x400");
    }
}
