//! Event delivery loop.

use std::future::Future;

use alloy_primitives::B256;
use futures::StreamExt;
use privnet_contracts::{EventMessage, Watch, WatchSet};
use tracing::{debug, error, info, trace, warn};

use crate::{ConsoleError, ContractHandle, NodeConsole, StreamCloseReason};

/// What happened to the logs seen by [`run_watches`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    /// Logs rendered and handed to the sink.
    pub delivered: usize,
    /// Logs no watch was registered for, or removed by a reorg.
    pub skipped: usize,
    /// Logs that failed to arrive or to decode.
    pub failed: usize,
}

/// Feed the contract's logs through `watches`, handing each rendered line to
/// `sink`, until `shutdown` resolves.
///
/// Delivery failures are logged and counted; the loop carries on. A stream
/// closed by the node ends the loop with [`ConsoleError::StreamClosed`].
pub async fn run_watches<C, F, S>(
    console: &C,
    handle: &ContractHandle,
    watches: &WatchSet,
    mut sink: F,
    shutdown: S,
) -> Result<WatchSummary, ConsoleError>
where
    C: NodeConsole + ?Sized,
    F: FnMut(EventMessage),
    S: Future<Output = ()>,
{
    let mut summary = WatchSummary::default();
    if watches.is_empty() {
        debug!(contract = handle.name(), "No events to watch");
        return Ok(summary);
    }

    let topics: Vec<B256> = watches.watches().iter().map(Watch::topic).collect();
    let mut logs = console.watch_logs(handle.address, &topics).await?;
    info!(
        contract = handle.name(),
        address = %handle.address,
        events = ?watches.watches().iter().map(Watch::name).collect::<Vec<_>>(),
        "Watching contract events"
    );

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            () = &mut shutdown => {
                debug!(contract = handle.name(), "Stopping watches");
                break;
            }
            item = logs.next() => match item {
                Some(Ok(log)) if log.removed => {
                    debug!(tx = ?log.transaction_hash, "Ignoring removed log");
                    summary.skipped += 1;
                }
                Some(Ok(log)) => match watches.dispatch(&log.log_data()) {
                    Some(Ok(message)) => {
                        summary.delivered += 1;
                        sink(message);
                    }
                    Some(Err(err)) => {
                        summary.failed += 1;
                        warn!(tx = ?log.transaction_hash, error = %err, "Failed to render event");
                    }
                    None => {
                        summary.skipped += 1;
                        trace!(topics = ?log.topics, "No watch for log");
                    }
                },
                Some(Err(err @ ConsoleError::StreamClosed { .. })) => {
                    error!(contract = handle.name(), error = %err, ?summary, "Stopped watching");
                    return Err(err);
                }
                Some(Err(err)) => {
                    summary.failed += 1;
                    error!(contract = handle.name(), error = %err, "Log delivery failed");
                }
                None => {
                    let err = ConsoleError::StreamClosed {
                        address: handle.address,
                        reason: StreamCloseReason::ConnectionClosed,
                    };
                    error!(contract = handle.name(), error = %err, ?summary, "Stopped watching");
                    return Err(err);
                }
            }
        }
    }
    Ok(summary)
}
