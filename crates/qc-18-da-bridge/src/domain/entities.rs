//! # Domain Entities
//!
//! `BridgeState` is the only persisted record: five fixed-width fields,
//! owned by exactly one bridge instance.

use serde::{Deserialize, Serialize};

use super::digest::domain_separate_validator_set_hash;
use super::errors::{BridgeError, Hash};

/// Persisted bridge state.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeState {
    /// Identifier scoping every domain-separated hash.
    pub bridge_id: Hash,
    /// Commitment to the latest validator set.
    pub checkpoint: Hash,
    /// Power required to authorize the next transition.
    pub power_threshold: u64,
    /// Shared counter for validator-set updates and tuple-root submissions.
    pub event_nonce: u64,
    /// Root of the attestation map (nonce -> data root tuple root).
    pub attestation_root: Hash,
}

impl BridgeState {
    /// Initial state for a freshly deployed bridge.
    pub fn genesis(
        bridge_id: Hash,
        nonce: u64,
        power_threshold: u64,
        validator_set_hash: &Hash,
        attestation_root: Hash,
    ) -> Self {
        Self {
            bridge_id,
            checkpoint: domain_separate_validator_set_hash(
                &bridge_id,
                nonce,
                power_threshold,
                validator_set_hash,
            ),
            power_threshold,
            event_nonce: nonce,
            attestation_root,
        }
    }

    /// Nonce the next accepted transition must carry.
    pub fn next_nonce(&self) -> Option<u64> {
        self.event_nonce.checked_add(1)
    }

    /// State after an accepted validator-set update.
    pub fn with_validator_set(&self, checkpoint: Hash, power_threshold: u64, nonce: u64) -> Self {
        Self {
            checkpoint,
            power_threshold,
            event_nonce: nonce,
            ..self.clone()
        }
    }

    /// State after an accepted tuple-root submission.
    pub fn with_attestation(&self, attestation_root: Hash, nonce: u64) -> Self {
        Self {
            attestation_root,
            event_nonce: nonce,
            ..self.clone()
        }
    }

    /// Encode the snapshot for a state store.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BridgeError> {
        bincode::serialize(self).map_err(|e| BridgeError::Serialization(e.to_string()))
    }

    /// Decode a snapshot produced by [`BridgeState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BridgeError> {
        bincode::deserialize(bytes).map_err(|e| BridgeError::Serialization(e.to_string()))
    }
}
