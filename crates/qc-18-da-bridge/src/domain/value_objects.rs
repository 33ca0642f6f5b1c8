//! # Domain Value Objects
//!
//! Immutable, per-call inputs to the bridge. None of these are persisted;
//! validator sets, signatures and proofs are supplied with every transaction.

use serde::{Deserialize, Serialize};

use super::digest::{encode_word, WORD_SIZE};
use super::errors::Hash;

/// A weighted attestor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Validator {
    /// Public key identifier (scheme-specific encoding).
    pub address: Vec<u8>,
    /// Voting weight, same units as the power threshold.
    pub power: u64,
}

impl Validator {
    /// Create a validator.
    pub fn new(address: impl Into<Vec<u8>>, power: u64) -> Self {
        Self {
            address: address.into(),
            power,
        }
    }
}

/// Opaque signature bytes produced by a validator over a message digest.
///
/// An empty signature marks a validator that did not sign.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorSignature(pub Vec<u8>);

impl ValidatorSignature {
    /// Wrap raw signature bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Placeholder for a validator that did not sign.
    pub fn absent() -> Self {
        Self(Vec::new())
    }

    /// Did this validator abstain?
    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A (block height, data root) pair from the source chain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DataRootTuple {
    /// Source chain block height (genesis is 1).
    pub height: u64,
    /// Data root of that block.
    pub data_root: Hash,
}

impl DataRootTuple {
    /// Create a tuple.
    pub fn new(height: u64, data_root: Hash) -> Self {
        Self { height, data_root }
    }

    /// Leaf encoding: `word(height) ‖ data_root`.
    pub fn encode(&self) -> [u8; 2 * WORD_SIZE] {
        let mut out = [0u8; 2 * WORD_SIZE];
        out[..WORD_SIZE].copy_from_slice(&encode_word(self.height));
        out[WORD_SIZE..].copy_from_slice(&self.data_root);
        out
    }
}

/// Audit path for one leaf of a binary Merkle tree.
///
/// Valid only relative to the `(root, num_of_leaves)` it was generated for.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinaryMerkleProof {
    /// Sibling digests, leaf level first.
    pub side_nodes: Vec<Hash>,
    /// Leaf index.
    pub key: u64,
    /// Tree size at proof generation time.
    pub num_of_leaves: u64,
}

/// Witness for one slot of the attestation map.
///
/// `is_lefts[i]` says whether the running node at level `i` is a left child;
/// `siblings[i]` is its sibling. Both are ordered leaf level first.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapWitness {
    /// Position of the running node at each level.
    pub is_lefts: Vec<bool>,
    /// Sibling digest at each level.
    pub siblings: Vec<Hash>,
}

/// Arguments of `update_validator_set`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorSetUpdate {
    /// Must be the current event nonce plus one.
    pub new_nonce: u64,
    /// Nonce at which the current validator set was checkpointed.
    pub old_nonce: u64,
    /// Threshold for the incoming set.
    pub new_power_threshold: u64,
    /// `set_digest` of the incoming set.
    pub new_validator_set_hash: Hash,
    /// Current set, in checkpoint order.
    pub current_validator_set: Vec<Validator>,
    /// One signature per current validator, same order.
    pub signatures: Vec<ValidatorSignature>,
}

/// Arguments of `submit_data_root_tuple_root`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataRootTupleRootSubmission {
    /// Must be the current event nonce plus one.
    pub new_nonce: u64,
    /// Nonce at which the current validator set was checkpointed.
    pub validator_set_nonce: u64,
    /// Root of the batch of data root tuples.
    pub data_root_tuple_root: Hash,
    /// Current set, in checkpoint order.
    pub current_validator_set: Vec<Validator>,
    /// One signature per current validator, same order.
    pub signatures: Vec<ValidatorSignature>,
    /// Witness for the slot at `new_nonce`.
    pub map_witness: MapWitness,
    /// Value the slot holds before the write.
    pub value_before: Hash,
}
