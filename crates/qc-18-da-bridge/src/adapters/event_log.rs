//! Event publishers.

use parking_lot::Mutex;
use tracing::info;

use crate::domain::BridgeEvent;
use crate::ports::EventPublisher;

/// Records every committed event in order.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<BridgeEvent>>,
}

impl InMemoryEventLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far.
    pub fn events(&self) -> Vec<BridgeEvent> {
        self.events.lock().clone()
    }

    /// Number of events published so far.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True if nothing was published.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: BridgeEvent) {
        self.events.lock().push(event);
    }
}

/// Emits each event as a tracing record and drops it.
#[derive(Clone, Debug, Default)]
pub struct TracingEventPublisher;

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: BridgeEvent) {
        match event {
            BridgeEvent::ValidatorSetUpdated {
                nonce,
                power_threshold,
                validator_set_hash,
            } => info!(
                "[qc-18] ValidatorSetUpdated nonce={} power_threshold={} hash={}",
                nonce,
                power_threshold,
                hex::encode(validator_set_hash)
            ),
            BridgeEvent::DataRootTupleRootSubmitted {
                nonce,
                data_root_tuple_root,
            } => info!(
                "[qc-18] DataRootTupleRootSubmitted nonce={} root={}",
                nonce,
                hex::encode(data_root_tuple_root)
            ),
        }
    }
}
