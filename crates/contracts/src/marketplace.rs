//! Marketplace contracts: vendors register stock, clients request assets and
//! vendors bid on the request.

use alloy_sol_types::{SolCall, SolEvent, sol};

use crate::{
    EventLine, Interface,
    line::{
        asset_requested, asset_shipped, bidding_finished, payment_received, price_proposed,
        vendor_registered,
    },
};

sol! {
    /// Marketplace where vendors are identified by name in price proposals.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface MarketPlace {
        function registerVendor(string name, uint256 assetBarcode, uint256 stockCount) external;
        function requestAsset(uint256 barcode) external;
        function dispose() external;
        function getMyVendorInfo() external view returns (string name, address acc, uint256 barcode, uint256 numAssets);
        function proposePrice(uint256 barcode, uint256 price) external;

        event VendorRegistered(string name, address account, uint256 assetBarcode, uint256 stockCount);
        event AssetRequested(address client, uint256 barcode);
        event PriceProposed(string vendorName, uint256 barcode, uint256 price);
        event BiddingFinished(uint256 barcode, uint256 price);
        event PaymentReceived(address sender, uint256 amount, uint256 barcode);
        event AssetShipped(uint256 barcode, uint256 trackingNumber);
    }
}

sol! {
    /// Marketplace variant where vendors advertise a delivery speed and clients
    /// request a quantity with a delivery deadline.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface DeliveryMarketPlace {
        function makeOffer(uint256 barcode, uint256 price) external;
        function registerVendor(string name, uint256 assetBarcode, uint256 stockCount, uint256 deliverySpeed) external;
        function dispose() external;
        function refuseOffer() external;
        function getMyVendorInfo() external view returns (string name, address acc, uint256 barcode, uint256 numAssets);
        function cancelRequest() external;
        function requestAsset(uint256 barcode, uint256 quantity, uint256 maxDays) external;

        event VendorRegistered(string name, address account, uint256 assetBarcode, uint256 stockCount, uint256 deliverySpeed);
        event AssetRequested(address client, uint256 barcode);
        event PriceProposed(string vendorName, uint256 barcode, uint256 price);
        event BiddingFinished(uint256 barcode, uint256 price);
        event PaymentReceived(address sender, uint256 amount, uint256 barcode);
        event AssetShipped(uint256 barcode, uint256 trackingNumber);
    }
}

/// Descriptor of [`MarketPlace`].
pub const MARKETPLACE: Interface = Interface {
    name: "MarketPlace",
    functions: &[
        MarketPlace::registerVendorCall::SIGNATURE,
        MarketPlace::requestAssetCall::SIGNATURE,
        MarketPlace::disposeCall::SIGNATURE,
        MarketPlace::getMyVendorInfoCall::SIGNATURE,
        MarketPlace::proposePriceCall::SIGNATURE,
    ],
    events: &[
        MarketPlace::VendorRegistered::SIGNATURE,
        MarketPlace::AssetRequested::SIGNATURE,
        MarketPlace::PriceProposed::SIGNATURE,
        MarketPlace::BiddingFinished::SIGNATURE,
        MarketPlace::PaymentReceived::SIGNATURE,
        MarketPlace::AssetShipped::SIGNATURE,
    ],
};

/// Descriptor of [`DeliveryMarketPlace`].
pub const DELIVERY_MARKETPLACE: Interface = Interface {
    name: "DeliveryMarketPlace",
    functions: &[
        DeliveryMarketPlace::makeOfferCall::SIGNATURE,
        DeliveryMarketPlace::registerVendorCall::SIGNATURE,
        DeliveryMarketPlace::disposeCall::SIGNATURE,
        DeliveryMarketPlace::refuseOfferCall::SIGNATURE,
        DeliveryMarketPlace::getMyVendorInfoCall::SIGNATURE,
        DeliveryMarketPlace::cancelRequestCall::SIGNATURE,
        DeliveryMarketPlace::requestAssetCall::SIGNATURE,
    ],
    events: &[
        DeliveryMarketPlace::VendorRegistered::SIGNATURE,
        DeliveryMarketPlace::AssetRequested::SIGNATURE,
        DeliveryMarketPlace::PriceProposed::SIGNATURE,
        DeliveryMarketPlace::BiddingFinished::SIGNATURE,
        DeliveryMarketPlace::PaymentReceived::SIGNATURE,
        DeliveryMarketPlace::AssetShipped::SIGNATURE,
    ],
};

impl EventLine for MarketPlace::VendorRegistered {
    fn line(&self) -> String {
        vendor_registered(&self.name, &self.account, self.stockCount, self.assetBarcode, "")
    }
}

impl EventLine for MarketPlace::AssetRequested {
    fn line(&self) -> String {
        asset_requested(self.barcode, &self.client)
    }
}

impl EventLine for MarketPlace::PriceProposed {
    fn line(&self) -> String {
        price_proposed(self.price, self.barcode, &self.vendorName)
    }
}

impl EventLine for MarketPlace::BiddingFinished {
    fn line(&self) -> String {
        bidding_finished(self.barcode, self.price)
    }
}

impl EventLine for MarketPlace::PaymentReceived {
    fn line(&self) -> String {
        payment_received(self.amount, &self.sender, self.barcode, "")
    }
}

impl EventLine for MarketPlace::AssetShipped {
    fn line(&self) -> String {
        asset_shipped(self.barcode, self.trackingNumber)
    }
}

impl EventLine for DeliveryMarketPlace::VendorRegistered {
    fn line(&self) -> String {
        let tail = format!(" and it delivers in {}", self.deliverySpeed);
        vendor_registered(&self.name, &self.account, self.stockCount, self.assetBarcode, &tail)
    }
}

impl EventLine for DeliveryMarketPlace::AssetRequested {
    fn line(&self) -> String {
        asset_requested(self.barcode, &self.client)
    }
}

impl EventLine for DeliveryMarketPlace::PriceProposed {
    fn line(&self) -> String {
        price_proposed(self.price, self.barcode, &self.vendorName)
    }
}

impl EventLine for DeliveryMarketPlace::BiddingFinished {
    fn line(&self) -> String {
        bidding_finished(self.barcode, self.price)
    }
}

// The deployed delivery marketplace reports successful payments explicitly.
impl EventLine for DeliveryMarketPlace::PaymentReceived {
    fn line(&self) -> String {
        payment_received(self.amount, &self.sender, self.barcode, " successfully")
    }
}

impl EventLine for DeliveryMarketPlace::AssetShipped {
    fn line(&self) -> String {
        asset_shipped(self.barcode, self.trackingNumber)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};

    use super::*;
    use crate::address_hex;

    fn vendor() -> Address {
        "0xabc0000000000000000000000000000000000001".parse().unwrap()
    }

    #[test]
    fn vendor_registered_line() {
        let event = MarketPlace::VendorRegistered {
            name: "Acme".to_string(),
            account: vendor(),
            assetBarcode: U256::from(42u64),
            stockCount: U256::from(5u64),
        };
        assert_eq!(
            event.line(),
            "[Acme has been registered as a vendor with the account number \
             0xabc0000000000000000000000000000000000001. It has 5 number of the asset 42 in its stock.]"
        );
    }

    #[test]
    fn vendor_registered_with_delivery_line() {
        let event = DeliveryMarketPlace::VendorRegistered {
            name: "Acme".to_string(),
            account: vendor(),
            assetBarcode: U256::from(42u64),
            stockCount: U256::from(5u64),
            deliverySpeed: U256::from(3u64),
        };
        assert!(event.line().ends_with(
            "It has 5 number of the asset 42 in its stock and it delivers in 3.]"
        ));
    }

    #[test]
    fn request_and_price_lines() {
        let client = Address::repeat_byte(0x0c);
        let requested = MarketPlace::AssetRequested { client, barcode: U256::from(7u64) };
        assert_eq!(requested.line(), format!("[Asset 7 requested by {}]", address_hex(&client)));

        let proposed = MarketPlace::PriceProposed {
            vendorName: "Acme".to_string(),
            barcode: U256::from(7u64),
            price: U256::from(120u64),
        };
        assert_eq!(proposed.line(), "[A price 120 is proposed for the asset 7 by Acme]");
    }

    #[test]
    fn payment_lines_differ_by_variant() {
        let sender = Address::repeat_byte(0x5e);
        let plain = MarketPlace::PaymentReceived {
            sender,
            amount: U256::from(1000u64),
            barcode: U256::from(7u64),
        };
        assert_eq!(
            plain.line(),
            format!("[A payment of 1000 is received from {} for the asset 7.]", address_hex(&sender))
        );

        let delivery = DeliveryMarketPlace::PaymentReceived {
            sender,
            amount: U256::from(1000u64),
            barcode: U256::from(7u64),
        };
        assert_eq!(
            delivery.line(),
            format!(
                "[A payment of 1000 is received from {} for the asset 7 successfully.]",
                address_hex(&sender)
            )
        );
    }

    #[test]
    fn shipped_line() {
        let event =
            MarketPlace::AssetShipped { barcode: U256::from(42u64), trackingNumber: U256::from(9001u64) };
        assert_eq!(event.line(), "[The asset 42 has been shipped with the tracking number 9001.]");
    }

    #[test]
    fn decodes_encoded_vendor_registration() {
        let event = MarketPlace::VendorRegistered {
            name: "Acme".to_string(),
            account: vendor(),
            assetBarcode: U256::from(42u64),
            stockCount: U256::from(5u64),
        };
        let decoded = MarketPlace::VendorRegistered::decode_log_data(&event.encode_log_data()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn descriptors_list_every_event() {
        assert_eq!(MARKETPLACE.events.len(), 6);
        assert!(MARKETPLACE.events.contains(&"VendorRegistered(string,address,uint256,uint256)"));
        assert_eq!(DELIVERY_MARKETPLACE.functions.len(), 7);
        assert!(DELIVERY_MARKETPLACE.events.contains(
            &"VendorRegistered(string,address,uint256,uint256,uint256)"
        ));
    }
}
