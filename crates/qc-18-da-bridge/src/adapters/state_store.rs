//! In-memory state store.
//!
//! Keeps the last committed state as its bincode encoding, the same bytes a
//! file- or database-backed store would write.

use parking_lot::Mutex;

use crate::domain::{BridgeError, BridgeState};
use crate::ports::StateStore;

/// Snapshot store backed by a byte buffer.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    snapshot: Mutex<Option<Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a previously persisted snapshot.
    pub fn from_snapshot(bytes: Vec<u8>) -> Self {
        Self {
            snapshot: Mutex::new(Some(bytes)),
        }
    }

    /// Raw bytes of the last save.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.snapshot.lock().clone()
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self) -> Result<Option<BridgeState>, BridgeError> {
        self.snapshot
            .lock()
            .as_deref()
            .map(BridgeState::from_bytes)
            .transpose()
    }

    fn save(&self, state: &BridgeState) -> Result<(), BridgeError> {
        let bytes = state.to_bytes()?;
        *self.snapshot.lock() = Some(bytes);
        Ok(())
    }
}
