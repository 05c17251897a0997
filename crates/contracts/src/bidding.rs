//! Simple bidding contracts: a client requests an asset, vendors propose
//! prices and the cheapest offer wins once bidding closes.

use alloy_sol_types::{SolCall, SolEvent, sol};

use crate::{
    EventLine, Interface, address_hex,
    line::{asset_requested, asset_shipped, bidding_finished, payment_received, price_proposed},
};

sol! {
    /// Bidding contract that validates vendors and identifies them by account.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface SimpleBidding {
        function registerVendor(string name, uint256 assetBarcode, uint256 stockCount) external;
        function requestAsset(uint256 barcode) external;
        function dispose() external;
        function getVendor(uint256 id) external view returns (string name, address acc, uint256 barcode, uint256 numAssets);
        function proposePrice(uint256 barcode, uint256 price) external;

        event VendorRegistered(string name, address account, uint256 assetBarcode, uint256 stockCount);
        event AssetRequested(address client, uint256 barcode);
        event VendorValidated(address vendor);
        event VendorNotValidated(address vendor);
        event PriceProposed(address vendor, uint256 barcode, uint256 price);
        event BiddingFinished(uint256 barcode, uint256 price);
        event PaymentReceived(address sender, uint256 amount, uint256 barcode);
        event AssetShipped(uint256 barcode, uint256 trackingNumber);
    }
}

sol! {
    /// Earlier bidding contract without vendor registration.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface SimpleBiddingLite {
        function requestAsset(uint256 barcode) external;
        function dispose() external;
        function proposePrice(uint256 barcode, uint256 price) external;

        event AssetRequested(address requester, uint256 barcode);
        event PriceProposed(address vendor, uint256 barcode, uint256 price);
        event BiddingFinished(uint256 barcode, uint256 price);
        event PaymentReceived(address sender, uint256 amount, uint256 barcode);
        event AssetShipped(uint256 barcode, uint256 trackingNumber);
    }
}

/// Descriptor of [`SimpleBidding`].
pub const SIMPLE_BIDDING: Interface = Interface {
    name: "SimpleBidding",
    functions: &[
        SimpleBidding::registerVendorCall::SIGNATURE,
        SimpleBidding::requestAssetCall::SIGNATURE,
        SimpleBidding::disposeCall::SIGNATURE,
        SimpleBidding::getVendorCall::SIGNATURE,
        SimpleBidding::proposePriceCall::SIGNATURE,
    ],
    events: &[
        SimpleBidding::VendorRegistered::SIGNATURE,
        SimpleBidding::AssetRequested::SIGNATURE,
        SimpleBidding::VendorValidated::SIGNATURE,
        SimpleBidding::VendorNotValidated::SIGNATURE,
        SimpleBidding::PriceProposed::SIGNATURE,
        SimpleBidding::BiddingFinished::SIGNATURE,
        SimpleBidding::PaymentReceived::SIGNATURE,
        SimpleBidding::AssetShipped::SIGNATURE,
    ],
};

/// Descriptor of [`SimpleBiddingLite`].
pub const SIMPLE_BIDDING_LITE: Interface = Interface {
    name: "SimpleBiddingLite",
    functions: &[
        SimpleBiddingLite::requestAssetCall::SIGNATURE,
        SimpleBiddingLite::disposeCall::SIGNATURE,
        SimpleBiddingLite::proposePriceCall::SIGNATURE,
    ],
    events: &[
        SimpleBiddingLite::AssetRequested::SIGNATURE,
        SimpleBiddingLite::PriceProposed::SIGNATURE,
        SimpleBiddingLite::BiddingFinished::SIGNATURE,
        SimpleBiddingLite::PaymentReceived::SIGNATURE,
        SimpleBiddingLite::AssetShipped::SIGNATURE,
    ],
};

impl EventLine for SimpleBidding::AssetRequested {
    fn line(&self) -> String {
        asset_requested(self.barcode, &self.client)
    }
}

impl EventLine for SimpleBidding::PriceProposed {
    fn line(&self) -> String {
        price_proposed(self.price, self.barcode, &address_hex(&self.vendor))
    }
}

impl EventLine for SimpleBidding::BiddingFinished {
    fn line(&self) -> String {
        bidding_finished(self.barcode, self.price)
    }
}

impl EventLine for SimpleBidding::PaymentReceived {
    fn line(&self) -> String {
        payment_received(self.amount, &self.sender, self.barcode, "")
    }
}

impl EventLine for SimpleBidding::AssetShipped {
    fn line(&self) -> String {
        asset_shipped(self.barcode, self.trackingNumber)
    }
}

impl EventLine for SimpleBiddingLite::AssetRequested {
    fn line(&self) -> String {
        asset_requested(self.barcode, &self.requester)
    }
}
