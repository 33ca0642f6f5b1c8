//! # Digest & Domain Separation
//!
//! Every digest the bridge produces is SHA-256 over a prefixed input. The
//! prefix binds the value to its role (leaf, node, checkpoint, tuple root) so
//! structurally similar inputs from different contexts never collide.

use sha2::{Digest, Sha256};

use super::errors::Hash;

/// Width of an encoded integer word.
pub const WORD_SIZE: usize = 32;

/// Maximum height of a binary Merkle tree (audit path bound).
pub const MAX_HEIGHT: usize = 256;

/// Binary Merkle leaf prefix.
pub const LEAF_PREFIX: u8 = 0x00;

/// Binary Merkle inner node prefix.
pub const NODE_PREFIX: u8 = 0x01;

/// Attestation map leaf prefix.
pub const MAP_LEAF_PREFIX: u8 = 0x02;

/// Attestation map inner node prefix.
pub const MAP_NODE_PREFIX: u8 = 0x03;

/// `"checkpoint"` right-padded to a word.
pub const VALIDATOR_SET_HASH_DOMAIN_SEPARATOR: [u8; 32] = domain_separator(b"checkpoint");

/// `"transactionBatch"` right-padded to a word.
pub const DATA_ROOT_TUPLE_ROOT_DOMAIN_SEPARATOR: [u8; 32] = domain_separator(b"transactionBatch");

/// Value of an unwritten attestation slot.
pub const EMPTY_VALUE: Hash = [0u8; 32];

const fn domain_separator(tag: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < tag.len() {
        out[i] = tag[i];
        i += 1;
    }
    out
}

/// Encode an integer as a 32-byte big-endian word.
pub fn encode_word(value: u64) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// SHA-256 over the concatenation of `parts`.
pub fn hash_parts(parts: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// `Hash(bridge_id ‖ tag ‖ field₁ ‖ field₂ ‖ …)`.
pub fn domain_hash(bridge_id: &Hash, tag: &[u8; 32], fields: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bridge_id);
    hasher.update(tag);
    for field in fields {
        hasher.update(field);
    }
    hasher.finalize().into()
}

/// Domain-separated commitment to a validator set as of `nonce`.
pub fn domain_separate_validator_set_hash(
    bridge_id: &Hash,
    nonce: u64,
    power_threshold: u64,
    validator_set_hash: &Hash,
) -> Hash {
    domain_hash(
        bridge_id,
        &VALIDATOR_SET_HASH_DOMAIN_SEPARATOR,
        &[
            &encode_word(nonce),
            &encode_word(power_threshold),
            validator_set_hash,
        ],
    )
}

/// Domain-separated commitment to a data root tuple root at `nonce`.
pub fn domain_separate_data_root_tuple_root(
    bridge_id: &Hash,
    nonce: u64,
    data_root_tuple_root: &Hash,
) -> Hash {
    domain_hash(
        bridge_id,
        &DATA_ROOT_TUPLE_ROOT_DOMAIN_SEPARATOR,
        &[&encode_word(nonce), data_root_tuple_root],
    )
}

/// Binary Merkle leaf digest: `Hash(0x00 ‖ data)`.
pub fn leaf_digest(data: &[u8]) -> Hash {
    hash_parts(&[&[LEAF_PREFIX], data])
}

/// Binary Merkle node digest: `Hash(0x01 ‖ left ‖ right)`.
pub fn node_digest(left: &Hash, right: &Hash) -> Hash {
    hash_parts(&[&[NODE_PREFIX], left, right])
}
