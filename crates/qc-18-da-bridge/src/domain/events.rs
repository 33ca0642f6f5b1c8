//! # Bridge Events
//!
//! Published after a transition commits, never before.

use serde::{Deserialize, Serialize};

use super::errors::Hash;

/// Events emitted by the bridge state machine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BridgeEvent {
    /// A validator set became effective (init or accepted update).
    ValidatorSetUpdated {
        /// Event nonce of the transition
        nonce: u64,
        /// Threshold of the new set
        power_threshold: u64,
        /// `set_digest` of the new set
        validator_set_hash: Hash,
    },
    /// A data root tuple root was admitted to the attestation map.
    DataRootTupleRootSubmitted {
        /// Event nonce (and map key) of the transition
        nonce: u64,
        /// Admitted root
        data_root_tuple_root: Hash,
    },
}

impl BridgeEvent {
    /// Event nonce carried by this event.
    pub fn nonce(&self) -> u64 {
        match self {
            Self::ValidatorSetUpdated { nonce, .. } => *nonce,
            Self::DataRootTupleRootSubmitted { nonce, .. } => *nonce,
        }
    }
}
