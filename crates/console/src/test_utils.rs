//! In-process node double, for tests here and in dependent crates
//! (`test-utils` feature).

use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use alloy_primitives::{Address, B256, LogData, U64, keccak256};
use jsonrpsee::{
    PendingSubscriptionSink, SubscriptionMessage,
    core::{RpcResult, SubscriptionResult},
    server::{Server, ServerHandle},
    types::ErrorObjectOwned,
};
use parking_lot::Mutex;
use privnet_config::{RpcConfig, WatchConfig, WatchMode};
use tokio::sync::broadcast;

use crate::{
    EthApiServer, EthPubSubApiServer, FilterId, LogFilter, PersonalApiServer, RpcConsole, RpcLog,
    TransactionReceipt, TransactionRequest,
};

/// Address the mock node assigns to every created contract.
pub const CONTRACT_ADDRESS: Address = Address::repeat_byte(0xc0);

#[derive(Debug, Default)]
struct NodeState {
    accounts: Vec<(Address, String)>,
    unlocked: Vec<Address>,
    sent: Vec<TransactionRequest>,
    receipts: HashMap<B256, (usize, TransactionReceipt)>,
    filters: HashMap<FilterId, (LogFilter, Vec<RpcLog>)>,
    next_filter: u64,
    uninstalled: Vec<FilterId>,
}

/// Node double speaking the subset of JSON-RPC the console uses.
///
/// Receipts show up after `receipt_delay` polls; created contracts always
/// land at [`CONTRACT_ADDRESS`].
#[derive(Debug, Clone)]
pub struct MockNode {
    state: Arc<Mutex<NodeState>>,
    logs: broadcast::Sender<RpcLog>,
    receipt_delay: usize,
}

impl MockNode {
    /// Node with an empty keystore.
    pub fn new() -> Self {
        Self {
            state: Arc::default(),
            logs: broadcast::channel(64).0,
            receipt_delay: 1,
        }
    }

    /// Node whose keystore already holds `count` accounts with the default labels.
    pub fn with_accounts(count: usize) -> Self {
        let node = Self::new();
        {
            let mut state = node.state.lock();
            for index in 0..count {
                let address = account_address(index);
                state.accounts.push((address, format!("Node01Account{index:02}")));
            }
        }
        node
    }

    /// Hold receipts back for `polls` receipt requests.
    pub const fn with_receipt_delay(mut self, polls: usize) -> Self {
        self.receipt_delay = polls;
        self
    }

    /// Serve the node on an ephemeral local port.
    pub async fn start(self) -> (ServerHandle, SocketAddr) {
        let server = Server::builder().build("127.0.0.1:0").await.expect("bind mock node");
        let addr = server.local_addr().expect("local addr");

        let mut module = jsonrpsee::RpcModule::new(());
        module.merge(EthApiServer::into_rpc(self.clone())).expect("eth methods");
        module.merge(EthPubSubApiServer::into_rpc(self.clone())).expect("eth subscriptions");
        module.merge(PersonalApiServer::into_rpc(self)).expect("personal methods");
        (server.start(module), addr)
    }

    /// Deliver `log` to every subscription and installed filter it matches.
    pub fn emit(&self, log: RpcLog) {
        {
            let mut state = self.state.lock();
            for (filter, queue) in state.filters.values_mut() {
                if filter.matches(&log) {
                    queue.push(log.clone());
                }
            }
        }
        let _ = self.logs.send(log);
    }

    /// Wait until a subscription or filter is in place.
    pub async fn wait_for_watchers(&self) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.logs.receiver_count() == 0 && self.state.lock().filters.is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("a watcher within timeout");
    }

    /// Accounts unlocked so far, in unlock order.
    pub fn unlocked(&self) -> Vec<Address> {
        self.state.lock().unlocked.clone()
    }

    /// Transactions received so far.
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.state.lock().sent.clone()
    }

    /// Filters removed so far.
    pub fn uninstalled(&self) -> Vec<FilterId> {
        self.state.lock().uninstalled.clone()
    }
}

impl Default for MockNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Address of the `index`-th account the mock node creates.
pub fn account_address(index: usize) -> Address {
    Address::with_last_byte(0x10 + index as u8)
}

/// Endpoints of a mock node listening on `addr`.
pub fn rpc_config(addr: SocketAddr) -> RpcConfig {
    RpcConfig {
        http_url: format!("http://{addr}"),
        ws_url: format!("ws://{addr}"),
        request_timeout_secs: 5,
    }
}

/// Console pointed at a running mock node.
pub fn console_for(addr: SocketAddr, mode: WatchMode) -> RpcConsole {
    let watch = WatchConfig { mode, poll_interval_ms: 20 };
    RpcConsole::new(rpc_config(addr), watch).expect("console")
}

/// `log` as emitted by `address` in block 1.
pub fn log_from(address: Address, log: LogData) -> RpcLog {
    RpcLog {
        address,
        topics: log.topics().to_vec(),
        data: log.data,
        block_number: Some(U64::from(1)),
        transaction_hash: Some(B256::repeat_byte(0x77)),
        log_index: Some(U64::ZERO),
        removed: false,
    }
}

fn node_error(message: impl Into<String>) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(-32000, message.into(), None::<()>)
}

#[jsonrpsee::core::async_trait]
impl EthApiServer for MockNode {
    async fn accounts(&self) -> RpcResult<Vec<Address>> {
        Ok(self.state.lock().accounts.iter().map(|(address, _)| *address).collect())
    }

    async fn send_transaction(&self, request: TransactionRequest) -> RpcResult<B256> {
        let mut state = self.state.lock();
        if !state.unlocked.contains(&request.from) {
            return Err(node_error("authentication needed: password or unlock"));
        }

        let mut preimage = (state.sent.len() as u64).to_be_bytes().to_vec();
        preimage.extend_from_slice(&request.data);
        let hash = keccak256(&preimage);

        let receipt = TransactionReceipt {
            transaction_hash: hash,
            block_number: Some(U64::from(1)),
            contract_address: request.to.is_none().then_some(CONTRACT_ADDRESS),
            gas_used: Some(U64::from(21_000)),
            status: Some(U64::from(1)),
        };
        state.receipts.insert(hash, (self.receipt_delay, receipt));
        state.sent.push(request);
        Ok(hash)
    }

    async fn transaction_receipt(&self, hash: B256) -> RpcResult<Option<TransactionReceipt>> {
        let mut state = self.state.lock();
        let Some((remaining, receipt)) = state.receipts.get_mut(&hash) else {
            return Ok(None);
        };
        if *remaining > 0 {
            *remaining -= 1;
            return Ok(None);
        }
        Ok(Some(receipt.clone()))
    }

    async fn new_filter(&self, filter: LogFilter) -> RpcResult<FilterId> {
        let mut state = self.state.lock();
        state.next_filter += 1;
        let id = format!("0x{:x}", state.next_filter);
        state.filters.insert(id.clone(), (filter, Vec::new()));
        Ok(id)
    }

    async fn filter_changes(&self, id: FilterId) -> RpcResult<Vec<RpcLog>> {
        let mut state = self.state.lock();
        let (_, queue) = state.filters.get_mut(&id).ok_or_else(|| node_error("filter not found"))?;
        Ok(std::mem::take(queue))
    }

    async fn uninstall_filter(&self, id: FilterId) -> RpcResult<bool> {
        let mut state = self.state.lock();
        let removed = state.filters.remove(&id).is_some();
        if removed {
            state.uninstalled.push(id);
        }
        Ok(removed)
    }
}

#[jsonrpsee::core::async_trait]
impl EthPubSubApiServer for MockNode {
    async fn subscribe_logs(
        &self,
        pending: PendingSubscriptionSink,
        kind: String,
        filter: LogFilter,
    ) -> SubscriptionResult {
        if kind != "logs" {
            let _ = pending
                .reject(ErrorObjectOwned::owned(
                    -32602,
                    format!("unsupported subscription kind: {kind}"),
                    None::<()>,
                ))
                .await;
            return Ok(());
        }

        let mut rx = self.logs.subscribe();
        let sink = pending.accept().await?;
        tokio::spawn(async move {
            while let Ok(log) = rx.recv().await {
                if !filter.matches(&log) {
                    continue;
                }
                let Ok(message) = SubscriptionMessage::from_json(&log) else {
                    return;
                };
                if sink.send(message).await.is_err() {
                    return;
                }
            }
        });
        Ok(())
    }
}

#[jsonrpsee::core::async_trait]
impl PersonalApiServer for MockNode {
    async fn new_account(&self, passphrase: String) -> RpcResult<Address> {
        let mut state = self.state.lock();
        let address = account_address(state.accounts.len());
        state.accounts.push((address, passphrase));
        Ok(address)
    }

    async fn unlock_account(
        &self,
        address: Address,
        passphrase: String,
        _duration: u64,
    ) -> RpcResult<bool> {
        let mut state = self.state.lock();
        let matches =
            state.accounts.iter().find(|(a, _)| *a == address).map(|(_, p)| *p == passphrase);
        match matches {
            Some(true) => {
                state.unlocked.push(address);
                Ok(true)
            }
            Some(false) => Err(node_error("could not decrypt key with given password")),
            None => Err(node_error("no key for given address or file")),
        }
    }
}
