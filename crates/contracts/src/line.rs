//! Rendering of decoded events into operator facing lines.

use alloy_primitives::{Address, U256, hex};

/// Renders a decoded event as a single bracketed line.
pub trait EventLine {
    /// The line printed when the event is observed.
    fn line(&self) -> String;
}

/// `0x` followed by the lowercase hex address.
pub fn address_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Wei amount as decimal ether, trailing fractional zeros trimmed.
///
/// `1_500_000_000_000_000_000` renders as `1.5`, one ether as `1`.
pub fn format_ether(wei: U256) -> String {
    let unit = U256::from(10u64).pow(U256::from(18u64));
    let (whole, frac) = wei.div_rem(unit);
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac = format!("{:0>18}", frac.to_string());
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

pub(crate) fn asset_requested(barcode: U256, requester: &Address) -> String {
    format!("[Asset {barcode} requested by {}]", address_hex(requester))
}

pub(crate) fn price_proposed(price: U256, barcode: U256, proposer: &str) -> String {
    format!("[A price {price} is proposed for the asset {barcode} by {proposer}]")
}

pub(crate) fn bidding_finished(barcode: U256, price: U256) -> String {
    format!(
        "[Bidding finished for the asset {barcode} with the price {price}. Make the payment if you want to buy the asset.]"
    )
}

pub(crate) fn payment_received(amount: U256, sender: &Address, barcode: U256, suffix: &str) -> String {
    format!(
        "[A payment of {amount} is received from {} for the asset {barcode}{suffix}.]",
        address_hex(sender)
    )
}

pub(crate) fn asset_shipped(barcode: U256, tracking_number: U256) -> String {
    format!("[The asset {barcode} has been shipped with the tracking number {tracking_number}.]")
}

pub(crate) fn vendor_registered(
    name: &str,
    account: &Address,
    stock_count: U256,
    barcode: U256,
    tail: &str,
) -> String {
    format!(
        "[{name} has been registered as a vendor with the account number {}. It has {stock_count} number of the asset {barcode} in its stock{tail}.]",
        address_hex(account)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ether_whole_and_fractional() {
        let ether = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_ether(U256::ZERO), "0");
        assert_eq!(format_ether(ether), "1");
        assert_eq!(format_ether(ether * U256::from(25u64)), "25");
        assert_eq!(format_ether(ether + ether / U256::from(2u64)), "1.5");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn address_is_lowercase_prefixed() {
        let address = Address::repeat_byte(0xAB);
        assert_eq!(address_hex(&address), format!("0x{}", "ab".repeat(20)));
    }
}
