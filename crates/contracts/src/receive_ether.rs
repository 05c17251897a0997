//! Contracts that forward received ether to a beneficiary account.

use alloy_sol_types::{SolCall, SolEvent, sol};

use crate::{EventLine, Interface, address_hex, format_ether};

sol! {
    /// Forwards ether to the account given at construction until its deadline.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface ReceiveEther {
        function deadline() external view returns (uint256);
        function deadlineReached() external;
        function receivingAccount() external view returns (address);
    }
}

sol! {
    /// [`ReceiveEther`] that logs each receipt and its own disposal.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface ReceiveEtherWithLog {
        function dispose() external;

        event EtherReceival(address sender, uint256 amount);
        event ContractDisposed(string contractName, uint256 time);
    }
}

/// Descriptor of [`ReceiveEther`].
pub const RECEIVE_ETHER: Interface = Interface {
    name: "ReceiveEther",
    functions: &[
        ReceiveEther::deadlineCall::SIGNATURE,
        ReceiveEther::deadlineReachedCall::SIGNATURE,
        ReceiveEther::receivingAccountCall::SIGNATURE,
    ],
    events: &[],
};

/// Descriptor of [`ReceiveEtherWithLog`].
pub const RECEIVE_ETHER_WITH_LOG: Interface = Interface {
    name: "ReceiveEtherWithLog",
    functions: &[ReceiveEtherWithLog::disposeCall::SIGNATURE],
    events: &[
        ReceiveEtherWithLog::EtherReceival::SIGNATURE,
        ReceiveEtherWithLog::ContractDisposed::SIGNATURE,
    ],
};

impl EventLine for ReceiveEtherWithLog::EtherReceival {
    fn line(&self) -> String {
        format!(
            "[Ether received: Sender: {}, Amount: {} ether(s)]",
            address_hex(&self.sender),
            format_ether(self.amount)
        )
    }
}

impl EventLine for ReceiveEtherWithLog::ContractDisposed {
    fn line(&self) -> String {
        format!("[Contract {} has been disposed.]", self.contractName)
    }
}
