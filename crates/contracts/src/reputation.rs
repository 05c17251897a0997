//! Reputation system for supply chain stakeholders.

use alloy_sol_types::{SolCall, sol};

use crate::Interface;

sol! {
    /// Stakeholders evaluate each other within a business process; reputation
    /// is the weighted score of those evaluations.
    #[allow(missing_docs)]
    #[sol(all_derives)]
    interface ReputationSystem {
        function evaluations(uint256 index) external view returns (uint256 businessProcessID, address evaluatorID, address evaluatedID, uint256 weight, uint256 score);
        function isInsideBusinessProcess(uint256 businessProcessID, address stakeholderID) external view returns (bool result);
        function getReputation(address stakeholderID) external view returns (uint256 reputation);
        function reputate(uint256 businessProcessID, address evaluatedID, uint256 score) external;
        function addStakeholder(string name, uint256 profession) external;
        function createBusinessProcess(address foodProviderID, address breederID, address animalCarrierID, address slaughterHouseID, address refrigeratedCarrierID, address brandID) external returns (uint256 bpID);
    }
}

/// Descriptor of [`ReputationSystem`].
pub const REPUTATION_SYSTEM: Interface = Interface {
    name: "ReputationSystem",
    functions: &[
        ReputationSystem::evaluationsCall::SIGNATURE,
        ReputationSystem::isInsideBusinessProcessCall::SIGNATURE,
        ReputationSystem::getReputationCall::SIGNATURE,
        ReputationSystem::reputateCall::SIGNATURE,
        ReputationSystem::addStakeholderCall::SIGNATURE,
        ReputationSystem::createBusinessProcessCall::SIGNATURE,
    ],
    events: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signatures_are_canonical() {
        assert_eq!(
            REPUTATION_SYSTEM.functions[5],
            "createBusinessProcess(address,address,address,address,address,address)"
        );
        assert_eq!(ReputationSystem::getReputationCall::SELECTOR.len(), 4);
        assert!(REPUTATION_SYSTEM.events.is_empty());
    }
}
