//! Routing of raw logs to event renderers.

use std::fmt;

use alloy_primitives::{B256, LogData};
use alloy_sol_types::SolEvent;

use crate::{ContractError, EventLine};

/// A renderer bound to one event signature.
#[derive(Clone, Copy)]
pub struct Watch {
    signature: &'static str,
    topic: B256,
    render: fn(&LogData) -> alloy_sol_types::Result<String>,
}

impl fmt::Debug for Watch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watch").field("signature", &self.signature).field("topic", &self.topic).finish()
    }
}

impl Watch {
    /// Watch for event `E`.
    pub const fn of<E: SolEvent + EventLine>() -> Self {
        Self { signature: E::SIGNATURE, topic: E::SIGNATURE_HASH, render: render::<E> }
    }

    /// Event name, e.g. `AssetShipped`.
    pub fn name(&self) -> &'static str {
        self.signature.split_once('(').map_or(self.signature, |(name, _)| name)
    }

    /// Canonical event signature.
    pub const fn signature(&self) -> &'static str {
        self.signature
    }

    /// `keccak256` of the signature; the first topic of every matching log.
    pub const fn topic(&self) -> B256 {
        self.topic
    }

    /// Decode `log` and render its line.
    pub fn render(&self, log: &LogData) -> Result<String, ContractError> {
        (self.render)(log).map_err(|source| ContractError::Decode { event: self.name(), source })
    }
}

fn render<E: SolEvent + EventLine>(log: &LogData) -> alloy_sol_types::Result<String> {
    E::decode_log_data(log).map(|event| event.line())
}

/// A rendered event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMessage {
    /// Event name.
    pub event: &'static str,
    /// Rendered line.
    pub line: String,
}

/// The watches registered against one contract.
#[derive(Debug, Clone, Default)]
pub struct WatchSet {
    watches: Vec<Watch>,
}

impl WatchSet {
    /// Watch set from a list of watches; later duplicates of a topic are ignored.
    pub fn new(watches: impl IntoIterator<Item = Watch>) -> Self {
        let mut set = Self::default();
        for watch in watches {
            if !set.watches.iter().any(|w| w.topic == watch.topic) {
                set.watches.push(watch);
            }
        }
        set
    }

    /// Registered watches in registration order.
    pub fn watches(&self) -> &[Watch] {
        &self.watches
    }

    /// Whether nothing is watched.
    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }

    /// Route a log to its watch.
    ///
    /// Returns `None` when no watch matches the log's first topic.
    pub fn dispatch(&self, log: &LogData) -> Option<Result<EventMessage, ContractError>> {
        let topic = log.topics().first()?;
        let watch = self.watches.iter().find(|w| w.topic == *topic)?;
        Some(watch.render(log).map(|line| EventMessage { event: watch.name(), line }))
    }
}
