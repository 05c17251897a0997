//! [`NodeConsole`] over JSON-RPC.

use std::fmt;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use futures::{StreamExt, stream};
use jsonrpsee::{
    core::client::SubscriptionCloseReason,
    http_client::{HttpClient, HttpClientBuilder},
    ws_client::{WsClient, WsClientBuilder},
};
use privnet_config::{ConfigError, RpcConfig, WatchConfig, WatchMode};
use tokio::{
    sync::OnceCell,
    time::{Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    ConsoleError, EthApiClient, EthPubSubApiClient, FilterId, LogFilter, LogStream, NodeConsole,
    PersonalApiClient, StreamCloseReason, TransactionReceipt, TransactionRequest,
};

/// Console backed by a node's HTTP endpoint, plus its WebSocket endpoint for
/// log subscriptions. The WebSocket is only dialled on the first subscription.
pub struct RpcConsole {
    http: HttpClient,
    ws: OnceCell<WsClient>,
    rpc: RpcConfig,
    watch: WatchConfig,
}

impl fmt::Debug for RpcConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcConsole")
            .field("http_url", &self.rpc.http_url)
            .field("ws_url", &self.rpc.ws_url)
            .field("watch", &self.watch)
            .finish_non_exhaustive()
    }
}

impl RpcConsole {
    /// Build a console for the endpoints in `rpc`, watching logs per `watch`.
    pub fn new(rpc: RpcConfig, watch: WatchConfig) -> Result<Self, ConsoleError> {
        check_scheme("rpc.http_url", &rpc.http_url, &["http://", "https://"])?;
        check_scheme("rpc.ws_url", &rpc.ws_url, &["ws://", "wss://"])?;

        let http =
            HttpClientBuilder::default().request_timeout(rpc.request_timeout()).build(&rpc.http_url)?;
        Ok(Self { http, ws: OnceCell::new(), rpc, watch })
    }

    async fn ws(&self) -> Result<&WsClient, ConsoleError> {
        let client = self
            .ws
            .get_or_try_init(|| async {
                debug!(url = %self.rpc.ws_url, "Connecting to WebSocket endpoint");
                WsClientBuilder::default()
                    .request_timeout(self.rpc.request_timeout())
                    .build(&self.rpc.ws_url)
                    .await
            })
            .await?;
        Ok(client)
    }

    /// The returned stream ends with a [`ConsoleError::StreamClosed`] item
    /// carrying the reason the node dropped the subscription.
    async fn subscribe(
        &self,
        address: Address,
        filter: LogFilter,
    ) -> Result<LogStream, ConsoleError> {
        let client = self.ws().await?;
        let subscription = client.subscribe_logs("logs".to_string(), filter).await?;

        let logs = stream::unfold(Some(subscription), move |state| async move {
            let mut subscription = state?;
            match subscription.next().await {
                Some(item) => Some((item.map_err(ConsoleError::from), Some(subscription))),
                None => {
                    let reason = match subscription.close_reason() {
                        Some(SubscriptionCloseReason::Lagged) => StreamCloseReason::Lagged,
                        _ => StreamCloseReason::ConnectionClosed,
                    };
                    Some((Err(ConsoleError::StreamClosed { address, reason }), None))
                }
            }
        });
        Ok(logs.boxed())
    }

    async fn poll(&self, filter: LogFilter) -> Result<LogStream, ConsoleError> {
        let id = self.http.new_filter(filter.starting_at("latest")).await?;
        debug!(filter = %id, "Installed log filter");

        let mut ticker = tokio::time::interval(self.watch.poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let poller = FilterPoller { client: self.http.clone(), id, ticker };

        let batches = stream::unfold(poller, |mut poller| async move {
            poller.ticker.tick().await;
            let batch: Vec<_> = match poller.client.filter_changes(poller.id.clone()).await {
                Ok(logs) => logs.into_iter().map(Ok).collect(),
                Err(err) => vec![Err(ConsoleError::from(err))],
            };
            Some((stream::iter(batch), poller))
        });
        Ok(batches.flatten().boxed())
    }
}

fn check_scheme(field: &'static str, url: &str, schemes: &[&str]) -> Result<(), ConfigError> {
    if schemes.iter().any(|scheme| url.starts_with(scheme)) {
        return Ok(());
    }
    Err(ConfigError::Invalid {
        field,
        reason: format!("`{url}` must start with one of {}", schemes.join(", ")),
    })
}

/// Filter polling state. Uninstalls the filter when the stream is dropped.
struct FilterPoller {
    client: HttpClient,
    id: FilterId,
    ticker: Interval,
}

impl Drop for FilterPoller {
    fn drop(&mut self) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let client = self.client.clone();
        let id = std::mem::take(&mut self.id);
        runtime.spawn(async move {
            match client.uninstall_filter(id.clone()).await {
                Ok(_) => debug!(filter = %id, "Uninstalled log filter"),
                Err(err) => warn!(filter = %id, error = %err, "Failed to uninstall log filter"),
            }
        });
    }
}

#[async_trait]
impl NodeConsole for RpcConsole {
    async fn accounts(&self) -> Result<Vec<Address>, ConsoleError> {
        Ok(EthApiClient::accounts(&self.http).await?)
    }

    async fn new_account(&self, passphrase: &str) -> Result<Address, ConsoleError> {
        Ok(self.http.new_account(passphrase.to_string()).await?)
    }

    async fn unlock_account(
        &self,
        address: Address,
        passphrase: &str,
        duration_secs: u64,
    ) -> Result<bool, ConsoleError> {
        Ok(PersonalApiClient::unlock_account(
            &self.http,
            address,
            passphrase.to_string(),
            duration_secs,
        )
        .await?)
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, ConsoleError> {
        Ok(EthApiClient::send_transaction(&self.http, request).await?)
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ConsoleError> {
        Ok(EthApiClient::transaction_receipt(&self.http, hash).await?)
    }

    async fn watch_logs(
        &self,
        address: Address,
        events: &[B256],
    ) -> Result<LogStream, ConsoleError> {
        let filter = LogFilter::contract(address, events.to_vec());
        info!(%address, mode = %self.watch.mode, "Opening log stream");
        match self.watch.mode {
            WatchMode::Subscribe => self.subscribe(address, filter).await,
            WatchMode::Poll => self.poll(filter).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use alloy_primitives::{Bytes, U64};

    use super::*;
    use crate::test_utils::{MockNode, console_for};

    fn log_from(address: Address, topic: B256) -> crate::RpcLog {
        crate::RpcLog {
            address,
            topics: vec![topic],
            data: Bytes::new(),
            block_number: Some(U64::from(7)),
            transaction_hash: Some(B256::repeat_byte(0x77)),
            log_index: Some(U64::ZERO),
            removed: false,
        }
    }

    #[test]
    fn rejects_urls_without_scheme() {
        let rpc = RpcConfig { http_url: "127.0.0.1:8545".to_string(), ..Default::default() };
        let err = RpcConsole::new(rpc, WatchConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::Config(ConfigError::Invalid { field: "rpc.http_url", .. })
        ));

        let rpc = RpcConfig { ws_url: "http://127.0.0.1:8546".to_string(), ..Default::default() };
        let err = RpcConsole::new(rpc, WatchConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::Config(ConfigError::Invalid { field: "rpc.ws_url", .. })
        ));
    }

    #[tokio::test]
    async fn keystore_calls_round_trip() {
        let node = MockNode::new();
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let created = console.new_account("Node01Account00").await.unwrap();
        assert_eq!(console.accounts().await.unwrap(), vec![created]);
        assert!(console.unlock_account(created, "Node01Account00", 0).await.unwrap());
        assert_eq!(node.unlocked(), vec![created]);
    }

    #[tokio::test]
    async fn wrong_passphrase_is_an_rpc_error() {
        let node = MockNode::with_accounts(1);
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let account = console.accounts().await.unwrap()[0];
        let err = console.unlock_account(account, "wrong", 0).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Rpc(_)));
        assert!(node.unlocked().is_empty());
    }

    #[tokio::test]
    async fn unknown_receipt_is_none() {
        let node = MockNode::new();
        let (_handle, addr) = node.start().await;
        let console = console_for(addr, WatchMode::Poll);

        assert!(console.transaction_receipt(B256::repeat_byte(0x01)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn subscription_delivers_matching_logs() {
        let node = MockNode::new();
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let contract = Address::repeat_byte(0x42);
        let topic = B256::repeat_byte(0xaa);
        let mut logs = console.watch_logs(contract, &[topic]).await.unwrap();
        node.wait_for_watchers().await;

        node.emit(log_from(Address::repeat_byte(0x99), topic));
        node.emit(log_from(contract, B256::repeat_byte(0xbb)));
        node.emit(log_from(contract, topic));

        let log = tokio::time::timeout(Duration::from_secs(2), logs.next())
            .await
            .expect("log within timeout")
            .expect("stream open")
            .expect("valid log");
        assert_eq!(log.address, contract);
        assert_eq!(log.topics, vec![topic]);
    }

    #[tokio::test]
    async fn closed_subscription_ends_with_reason() {
        let node = MockNode::new();
        let (server, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Subscribe);

        let contract = Address::repeat_byte(0x42);
        let mut logs = console.watch_logs(contract, &[]).await.unwrap();
        node.wait_for_watchers().await;
        server.stop().unwrap();

        let last = tokio::time::timeout(Duration::from_secs(5), logs.next())
            .await
            .expect("close within timeout")
            .expect("closing item");
        assert!(matches!(
            last,
            Err(ConsoleError::StreamClosed { address, .. }) if address == contract
        ));
        assert!(logs.next().await.is_none());
    }

    #[tokio::test]
    async fn polling_drains_filter_and_uninstalls_on_drop() {
        let node = MockNode::new();
        let (_handle, addr) = node.clone().start().await;
        let console = console_for(addr, WatchMode::Poll);

        let contract = Address::repeat_byte(0x42);
        let topic = B256::repeat_byte(0xaa);
        let mut logs = console.watch_logs(contract, &[topic]).await.unwrap();
        node.wait_for_watchers().await;

        node.emit(log_from(contract, topic));
        node.emit(log_from(Address::repeat_byte(0x99), topic));
        node.emit(log_from(contract, topic));

        for _ in 0..2 {
            let log = tokio::time::timeout(Duration::from_secs(2), logs.next())
                .await
                .expect("log within timeout")
                .expect("stream open")
                .expect("valid log");
            assert_eq!(log.address, contract);
        }

        drop(logs);
        tokio::time::timeout(Duration::from_secs(2), async {
            while node.uninstalled().is_empty() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("filter uninstalled");
    }
}
