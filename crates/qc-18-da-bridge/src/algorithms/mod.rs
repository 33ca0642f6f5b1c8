//! # Algorithms Module
//!
//! Pure verification algorithms composed by the bridge state machine.

pub mod attestation_map;
pub mod binary_merkle;
pub mod threshold;
pub mod validator_set;

pub use attestation_map::{
    apply_put, empty_map_root, empty_subtree_digests, map_leaf_digest, map_node_digest,
    verify_get, MAP_HEIGHT,
};
pub use binary_merkle::{build_proof, check_proof, compute_root, path_length_from_key, verify};
pub use threshold::check_validator_signatures;
pub use validator_set::{compute_validator_set_hash, total_power, verify_checkpoint};
