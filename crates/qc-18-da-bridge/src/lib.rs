//! # QC-18 Data Availability Bridge
//!
//! Light-client bridge that tracks an external validator set and accepts
//! data availability commitments it has signed off on.
//!
//! **Subsystem ID:** 18  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)  
//!
//! ## Purpose
//!
//! A source chain batches `(height, data_root)` tuples into a binary Merkle
//! tree and has its validators sign the tree root. The bridge:
//! - follows validator-set rotations through signed checkpoints
//! - records each signed tuple root in an authenticated map keyed by nonce
//! - answers "was this tuple attested?" with a map witness plus an inclusion proof
//!
//! ## Security Properties
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Strict nonce ordering | Every transition carries exactly `event_nonce + 1` |
//! | Domain separation | Bridge id and tag bound into every signed digest |
//! | Leaf/node prefixes | Second-preimage resistant Merkle trees |
//! | Write-once slots | A nonce's tuple root can never be replaced |
//! | Fail closed | Rejected calls leave the stored state untouched |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-da-bridge/
//! ├── domain/          # BridgeState, value objects, digests, errors, invariants
//! ├── algorithms/      # Binary Merkle, attestation map, validator set, threshold
//! ├── ports/           # API traits (inbound) + dependency traits (outbound)
//! ├── adapters/        # Ed25519/secp256k1, in-memory map, store, event log
//! ├── application/     # BridgeService orchestrating everything
//! └── config.rs        # BridgeConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{
    verifier_for, Ed25519Signer, Ed25519Verifier, InMemoryAttestationMap, InMemoryEventLog,
    InMemoryStateStore, Secp256k1Signer, Secp256k1Verifier, TracingEventPublisher,
};
pub use algorithms::{
    apply_put, build_proof, check_proof, check_validator_signatures, compute_root,
    compute_validator_set_hash, empty_map_root, path_length_from_key, total_power, verify,
    verify_checkpoint, verify_get, MAP_HEIGHT,
};
pub use application::BridgeService;
pub use config::{BridgeConfig, SignatureScheme};
pub use domain::{
    domain_separate_data_root_tuple_root, domain_separate_validator_set_hash, encode_word,
    leaf_digest, node_digest, BinaryMerkleProof, BridgeError, BridgeEvent, BridgeState,
    DataRootTuple, DataRootTupleRootSubmission, Hash, MapWitness, Validator, ValidatorSetUpdate,
    ValidatorSignature, DATA_ROOT_TUPLE_ROOT_DOMAIN_SEPARATOR, EMPTY_VALUE, MAX_HEIGHT,
    VALIDATOR_SET_HASH_DOMAIN_SEPARATOR,
};
pub use ports::{
    AuthenticatedMap, BridgeApi, DataAvailabilityOracle, DigestSigner, EventPublisher,
    MockSignatureVerifier, MockSigner, MockStateStore, SignatureVerifier, StateStore,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
