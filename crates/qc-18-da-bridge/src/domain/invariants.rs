//! # Domain Invariants
//!
//! Preconditions every state transition checks before it may commit.

use super::digest::EMPTY_VALUE;
use super::entities::BridgeState;
use super::errors::{BridgeError, Hash};

/// Default bound on validator list length.
pub const DEFAULT_MAX_VALIDATORS: usize = 1024;

/// Invariant: the event nonce advances by exactly one per transition.
///
/// Replays (same nonce) and gaps are both rejected.
pub fn invariant_next_nonce(state: &BridgeState, new_nonce: u64) -> Result<(), BridgeError> {
    match state.next_nonce() {
        Some(expected) if expected == new_nonce => Ok(()),
        Some(expected) => Err(BridgeError::NonceMismatch {
            expected,
            got: new_nonce,
        }),
        // Counter exhausted: nothing is acceptable any more.
        None => Err(BridgeError::NonceMismatch {
            expected: state.event_nonce,
            got: new_nonce,
        }),
    }
}

/// Invariant: one signature per validator.
pub fn invariant_signature_count(validators: usize, signatures: usize) -> Result<(), BridgeError> {
    if validators != signatures {
        return Err(BridgeError::SignatureCountMismatch {
            validators,
            signatures,
        });
    }
    Ok(())
}

/// Invariant: a threshold of zero would authorize anything.
pub fn invariant_power_threshold(power_threshold: u64) -> Result<(), BridgeError> {
    if power_threshold == 0 {
        return Err(BridgeError::InvalidPowerThreshold(power_threshold));
    }
    Ok(())
}

/// Invariant: per-call work is bounded by the validator list length.
pub fn invariant_validator_count(got: usize, max: usize) -> Result<(), BridgeError> {
    if got > max {
        return Err(BridgeError::TooManyValidators { got, max });
    }
    Ok(())
}

/// Invariant: attestation slots are written at most once.
pub fn invariant_slot_empty(nonce: u64, value_before: &Hash) -> Result<(), BridgeError> {
    if *value_before != EMPTY_VALUE {
        return Err(BridgeError::SlotOccupied { nonce });
    }
    Ok(())
}

/// Invariant: a committed slot must be distinguishable from an empty one.
pub fn invariant_tuple_root_not_empty(data_root_tuple_root: &Hash) -> Result<(), BridgeError> {
    if *data_root_tuple_root == EMPTY_VALUE {
        return Err(BridgeError::EmptyDataRootTupleRoot);
    }
    Ok(())
}
