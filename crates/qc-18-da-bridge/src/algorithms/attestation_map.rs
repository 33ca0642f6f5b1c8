//! # Attestation Map Witnesses
//!
//! Witness math for the sparse Merkle map binding nonces to admitted data
//! root tuple roots. The map has a fixed height of 64 (one level per nonce
//! bit), so every well-formed witness carries exactly 64 siblings.
//!
//! The bridge never holds the map itself; it only checks witnesses against
//! its stored root and derives the root after a write.

use std::sync::OnceLock;

use crate::domain::{
    hash_parts, BridgeError, Hash, MapWitness, EMPTY_VALUE, MAP_LEAF_PREFIX, MAP_NODE_PREFIX,
};

/// Height of the attestation map.
pub const MAP_HEIGHT: usize = 64;

/// Map leaf digest: `Hash(0x02 ‖ value)`.
pub fn map_leaf_digest(value: &Hash) -> Hash {
    hash_parts(&[&[MAP_LEAF_PREFIX], value])
}

/// Map node digest: `Hash(0x03 ‖ left ‖ right)`.
pub fn map_node_digest(left: &Hash, right: &Hash) -> Hash {
    hash_parts(&[&[MAP_NODE_PREFIX], left, right])
}

/// Digests of empty subtrees, index = subtree height (0 = empty leaf).
pub fn empty_subtree_digests() -> &'static [Hash; MAP_HEIGHT + 1] {
    static DIGESTS: OnceLock<[Hash; MAP_HEIGHT + 1]> = OnceLock::new();
    DIGESTS.get_or_init(|| {
        let mut digests = [[0u8; 32]; MAP_HEIGHT + 1];
        digests[0] = map_leaf_digest(&EMPTY_VALUE);
        for height in 1..=MAP_HEIGHT {
            digests[height] = map_node_digest(&digests[height - 1], &digests[height - 1]);
        }
        digests
    })
}

/// Root of the map with no slot written.
pub fn empty_map_root() -> Hash {
    empty_subtree_digests()[MAP_HEIGHT]
}

impl MapWitness {
    /// Root and key implied by placing `value` at this witness's slot.
    ///
    /// Returns `None` for a malformed witness.
    pub fn compute_root_and_key(&self, value: &Hash) -> Option<(Hash, u64)> {
        if self.is_lefts.len() != MAP_HEIGHT || self.siblings.len() != MAP_HEIGHT {
            return None;
        }

        let mut digest = map_leaf_digest(value);
        let mut key = 0u64;

        for (level, (is_left, sibling)) in self.is_lefts.iter().zip(&self.siblings).enumerate() {
            if *is_left {
                digest = map_node_digest(&digest, sibling);
            } else {
                digest = map_node_digest(sibling, &digest);
                key |= 1u64 << level;
            }
        }

        Some((digest, key))
    }
}

/// Does `witness` prove that slot `key` holds `value` under `root`?
pub fn verify_get(root: &Hash, key: u64, value: &Hash, witness: &MapWitness) -> bool {
    matches!(
        witness.compute_root_and_key(value),
        Some((computed_root, computed_key)) if computed_root == *root && computed_key == key
    )
}

/// Root after replacing `old_value` with `new_value` at `key`.
///
/// # Errors
/// * `BridgeError::MapWitnessMismatch` - the witness does not prove
///   `old_value` at `key` under `root`
pub fn apply_put(
    root: &Hash,
    key: u64,
    old_value: &Hash,
    new_value: &Hash,
    witness: &MapWitness,
) -> Result<Hash, BridgeError> {
    if !verify_get(root, key, old_value, witness) {
        return Err(BridgeError::MapWitnessMismatch);
    }

    witness
        .compute_root_and_key(new_value)
        .map(|(new_root, _)| new_root)
        .ok_or(BridgeError::MapWitnessMismatch)
}
