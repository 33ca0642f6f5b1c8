//! # Domain Errors
//!
//! Error types for the Data Availability Bridge.
//!
//! Mutating operations fail closed: any variant returned from a state
//! transition means the stored bridge state was left untouched.

use thiserror::Error;

/// Hash type alias (32-byte SHA-256).
pub type Hash = [u8; 32];

/// Bridge error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// Supplied nonce is not exactly one more than the current event nonce.
    #[error("Nonce mismatch: expected {expected}, got {got}")]
    NonceMismatch {
        /// Nonce the bridge would accept
        expected: u64,
        /// Nonce supplied by the caller
        got: u64,
    },

    /// Supplied validator set does not reproduce the stored checkpoint.
    #[error("Validator set does not match the stored checkpoint")]
    ValidatorSetMismatch,

    /// Signers did not reach the power threshold.
    #[error("Insufficient signature power: {got} < {required}")]
    InsufficientSignaturePower {
        /// Cumulative power of verified signers
        got: u64,
        /// Required power threshold
        required: u64,
    },

    /// A signature in the checked prefix failed verification.
    #[error("Invalid signature at index {index}")]
    SignatureInvalid {
        /// Position in the validator list
        index: usize,
    },

    /// Validator and signature lists differ in length.
    #[error("Signature count mismatch: {validators} validators, {signatures} signatures")]
    SignatureCountMismatch {
        /// Number of validators supplied
        validators: usize,
        /// Number of signatures supplied
        signatures: usize,
    },

    /// Audit path length does not match the tree shape.
    #[error("Malformed proof length: expected {expected} side nodes, got {got}")]
    MalformedProofLength {
        /// Side nodes the tree shape requires
        expected: usize,
        /// Side nodes supplied
        got: usize,
    },

    /// Leaf index is not inside the tree.
    #[error("Key {key} out of range for {num_of_leaves} leaves")]
    KeyOutOfRange {
        /// Leaf index
        key: u64,
        /// Tree size
        num_of_leaves: u64,
    },

    /// Audit path does not hash to the claimed root.
    #[error("Binary Merkle proof does not match root")]
    InvalidProof,

    /// Attestation map witness does not prove the claimed slot.
    #[error("Attestation map witness mismatch")]
    MapWitnessMismatch,

    /// Attestation map slot already holds a value.
    #[error("Attestation slot {nonce} already written")]
    SlotOccupied {
        /// Nonce of the occupied slot
        nonce: u64,
    },

    /// The empty value cannot be committed as a data root tuple root.
    #[error("Data root tuple root must not be empty")]
    EmptyDataRootTupleRoot,

    /// `init` was called on an initialized bridge.
    #[error("Bridge already initialized")]
    AlreadyInitialized,

    /// Operation requires an initialized bridge.
    #[error("Bridge not initialized")]
    NotInitialized,

    /// A zero power threshold would admit unsigned transitions.
    #[error("Invalid power threshold: {0}")]
    InvalidPowerThreshold(u64),

    /// Validator list exceeds the configured bound.
    #[error("Too many validators: {got} > {max}")]
    TooManyValidators {
        /// Validators supplied
        got: usize,
        /// Configured maximum
        max: usize,
    },

    /// State store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot encoding failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration rejected by `BridgeConfig::validate`.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
