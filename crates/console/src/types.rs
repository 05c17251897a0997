//! JSON-RPC wire types.

use alloy_primitives::{Address, B256, Bytes, LogData, U64};
use serde::{Deserialize, Serialize};

/// Transaction submitted through `eth_sendTransaction`; the node signs it with
/// the unlocked `from` account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Sending account.
    pub from: Address,
    /// Recipient; `None` creates a contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Calldata, or creation code when `to` is `None`.
    pub data: Bytes,
    /// Gas limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U64>,
}

impl TransactionRequest {
    /// Contract creation from `from` carrying `code`.
    pub fn create(from: Address, code: Bytes, gas: u64) -> Self {
        Self { from, to: None, data: code, gas: Some(U64::from(gas)) }
    }
}

/// The subset of `eth_getTransactionReceipt` the tool reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the transaction.
    pub transaction_hash: B256,
    /// Block the transaction was mined in.
    #[serde(default)]
    pub block_number: Option<U64>,
    /// Address of the created contract, if any.
    #[serde(default)]
    pub contract_address: Option<Address>,
    /// Gas used by the transaction.
    #[serde(default)]
    pub gas_used: Option<U64>,
    /// `1` on success, `0` on failure. Absent before Byzantium.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    /// Whether the receipt explicitly reports a failure.
    pub fn is_failure(&self) -> bool {
        self.status.is_some_and(|s| s.is_zero())
    }
}

/// A log entry as delivered by `eth_getFilterChanges` or a `logs` subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLog {
    /// Emitting contract.
    pub address: Address,
    /// Indexed topics; the first is the event signature hash.
    pub topics: Vec<B256>,
    /// Non-indexed event data.
    pub data: Bytes,
    /// Block number, absent for pending logs.
    #[serde(default)]
    pub block_number: Option<U64>,
    /// Emitting transaction.
    #[serde(default)]
    pub transaction_hash: Option<B256>,
    /// Position within the block.
    #[serde(default)]
    pub log_index: Option<U64>,
    /// Set when the log was removed by a reorg.
    #[serde(default)]
    pub removed: bool,
}

impl RpcLog {
    /// Topics and data as a [`LogData`] for event decoding.
    pub fn log_data(&self) -> LogData {
        LogData::new_unchecked(self.topics.clone(), self.data.clone())
    }
}

/// Log filter for `eth_newFilter` and `eth_subscribe("logs")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    /// Only logs from this contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Positional topic filters; each position matches any of its entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Vec<B256>>>,
    /// First block to scan, e.g. `latest`. Ignored by subscriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_block: Option<String>,
}

impl LogFilter {
    /// Logs emitted by `address` whose signature is one of `events`.
    pub fn contract(address: Address, events: Vec<B256>) -> Self {
        let topics = (!events.is_empty()).then(|| vec![events]);
        Self { address: Some(address), topics, from_block: None }
    }

    /// Start scanning from the given block tag.
    #[must_use]
    pub fn starting_at(mut self, tag: impl Into<String>) -> Self {
        self.from_block = Some(tag.into());
        self
    }

    /// Whether `log` passes the address and topic constraints.
    pub fn matches(&self, log: &RpcLog) -> bool {
        if self.address.is_some_and(|a| a != log.address) {
            return false;
        }
        self.topics.iter().flatten().enumerate().all(|(i, position)| {
            position.is_empty() || log.topics.get(i).is_some_and(|t| position.contains(t))
        })
    }
}

/// Identifier returned by `eth_newFilter`.
pub type FilterId = String;

#[cfg(test)]
mod tests {
    use super::*;

    fn log(address: Address, topics: Vec<B256>) -> RpcLog {
        RpcLog {
            address,
            topics,
            data: Bytes::new(),
            block_number: Some(U64::from(1)),
            transaction_hash: None,
            log_index: None,
            removed: false,
        }
    }

    #[test]
    fn create_request_serializes_without_recipient() {
        let request = TransactionRequest::create(
            Address::repeat_byte(0x01),
            Bytes::from(vec![0x60, 0x60]),
            4_700_000,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("to").is_none());
        assert_eq!(value["gas"], "0x47b760");
        assert_eq!(value["data"], "0x6060");
    }

    #[test]
    fn receipt_tolerates_missing_fields() {
        let receipt: TransactionReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": B256::repeat_byte(0x11),
            "contractAddress": null,
            "logs": [],
        }))
        .unwrap();
        assert!(receipt.contract_address.is_none());
        assert!(!receipt.is_failure());
    }

    #[test]
    fn receipt_status_zero_is_failure() {
        let receipt: TransactionReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": B256::repeat_byte(0x11),
            "status": "0x0",
        }))
        .unwrap();
        assert!(receipt.is_failure());
    }

    #[test]
    fn contract_filter_serializes_topic_alternatives() {
        let filter = LogFilter::contract(
            Address::repeat_byte(0x42),
            vec![B256::repeat_byte(0xaa), B256::repeat_byte(0xbb)],
        )
        .starting_at("latest");
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["topics"].as_array().unwrap().len(), 1);
        assert_eq!(value["topics"][0].as_array().unwrap().len(), 2);
        assert_eq!(value["fromBlock"], "latest");
    }

    #[test]
    fn filter_matches_address_and_topic() {
        let address = Address::repeat_byte(0x42);
        let wanted = B256::repeat_byte(0xaa);
        let filter = LogFilter::contract(address, vec![wanted]);

        assert!(filter.matches(&log(address, vec![wanted])));
        assert!(!filter.matches(&log(address, vec![B256::repeat_byte(0xbb)])));
        assert!(!filter.matches(&log(Address::repeat_byte(0x99), vec![wanted])));
        assert!(!filter.matches(&log(address, vec![])));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = LogFilter::default();
        assert!(filter.matches(&log(Address::ZERO, vec![])));
        let no_events = LogFilter::contract(Address::ZERO, vec![]);
        assert!(no_events.topics.is_none());
        assert!(no_events.matches(&log(Address::ZERO, vec![B256::ZERO])));
    }
}
