//! `contracts`.

use std::fmt::Write;

use privnet_contracts::{Artifact, Constructor, catalog};

/// Print the catalog.
pub(crate) fn print() {
    print!("{}", render());
}

fn render() -> String {
    let mut out = String::new();
    for artifact in catalog() {
        describe(&mut out, artifact);
    }
    out
}

fn describe(out: &mut String, artifact: &Artifact) {
    let _ = writeln!(out, "{} ({}): {}", artifact.name, artifact.interface.name, artifact.summary);
    let _ = writeln!(out, "  sender: account #{}", artifact.sender);
    match artifact.constructor {
        Constructor::Empty => {}
        Constructor::Account(index) => {
            let _ = writeln!(out, "  constructor: address of account #{index}");
        }
    }
    for function in artifact.interface.functions {
        let _ = writeln!(out, "  function {function}");
    }
    for role in artifact.roles {
        let names: Vec<_> = role.watches.iter().map(|w| w.name()).collect();
        if names.is_empty() {
            let _ = writeln!(out, "  {}: no events", role.role);
        } else {
            let _ = writeln!(out, "  {}: {}", role.role, names.join(", "));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_artifact() {
        let listing = render();
        for artifact in catalog() {
            assert!(listing.contains(&format!("{} (", artifact.name)), "{} missing", artifact.name);
        }
    }

    #[test]
    fn shows_roles_and_constructor() {
        let listing = render();
        assert!(listing.contains(
            "  vendor: VendorRegistered, AssetRequested, PriceProposed, BiddingFinished"
        ));
        assert!(listing.contains("  constructor: address of account #1"));
        assert!(listing.contains("  deployer: no events"));
    }
}
