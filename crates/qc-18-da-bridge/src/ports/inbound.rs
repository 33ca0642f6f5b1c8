//! # Inbound Ports
//!
//! API traits defining what the bridge can do.

use crate::domain::{
    BinaryMerkleProof, BridgeError, BridgeState, DataRootTuple, DataRootTupleRootSubmission, Hash,
    MapWitness, ValidatorSetUpdate,
};

/// Bridge state machine API - inbound port.
///
/// Every mutating call is atomic: it either commits a complete new state or
/// returns an error with the stored state untouched. A call computed against
/// a stale nonce fails with `NonceMismatch` and must be rebuilt against the
/// current state.
pub trait BridgeApi: Send + Sync {
    /// Initialize the bridge. Runs exactly once per instance.
    fn init(
        &self,
        bridge_id: Hash,
        nonce: u64,
        power_threshold: u64,
        validator_set_hash: Hash,
    ) -> Result<(), BridgeError>;

    /// Rotate to a new validator set signed off by the current one.
    fn update_validator_set(&self, update: ValidatorSetUpdate) -> Result<(), BridgeError>;

    /// Admit a data root tuple root signed off by the current validator set.
    fn submit_data_root_tuple_root(
        &self,
        submission: DataRootTupleRootSubmission,
    ) -> Result<(), BridgeError>;

    /// Snapshot of the current state (`None` before `init`).
    fn state(&self) -> Option<BridgeState>;
}

/// Data availability oracle - inbound port for read-only callers.
pub trait DataAvailabilityOracle: Send + Sync {
    /// Is `tuple` included in the tuple root admitted at `tuple_root_nonce`?
    ///
    /// Never fails: every rejection collapses to `false`.
    fn verify_attestation(
        &self,
        map_witness: &MapWitness,
        tuple_root_nonce: u64,
        tuple: &DataRootTuple,
        proof: &BinaryMerkleProof,
        claimed_root: &Hash,
    ) -> bool;
}
