//! # Binary Merkle Tree
//!
//! Inclusion proofs for non-power-of-two binary Merkle trees (RFC 6962 split:
//! the left subtree holds the largest power of two strictly below the leaf
//! count).
//!
//! Verification walks the "complete subtree" audit path bottom-up and is
//! iterative throughout, so an adversarial proof cannot exhaust the stack.

use crate::domain::{
    hash_parts, leaf_digest, node_digest, BinaryMerkleProof, BridgeError, Hash, MAX_HEIGHT,
};

/// Verify that `data` is the leaf at `proof.key` of the tree with root `root`.
///
/// Total: every malformed input yields `false`.
pub fn verify(root: &Hash, proof: &BinaryMerkleProof, data: &[u8]) -> bool {
    check_proof(root, proof, data).is_ok()
}

/// Verify an inclusion proof, reporting why it was rejected.
///
/// # Algorithm
///
/// 1. Bounds: key in range, side node count equals the path length.
/// 2. While the subtree of the current height containing `key` is complete,
///    combine with the next side node on the side `key` is not on.
/// 3. If the last complete subtree does not end at the last leaf, the next
///    side node is the elevated orphan on the right.
/// 4. All remaining side nodes are left siblings.
///
/// # Time Complexity: O(log n)
pub fn check_proof(root: &Hash, proof: &BinaryMerkleProof, data: &[u8]) -> Result<(), BridgeError> {
    let side_nodes = &proof.side_nodes;
    let key = proof.key;
    let num_of_leaves = proof.num_of_leaves;

    if side_nodes.len() > MAX_HEIGHT {
        return Err(BridgeError::MalformedProofLength {
            expected: MAX_HEIGHT,
            got: side_nodes.len(),
        });
    }

    if key >= num_of_leaves {
        return Err(BridgeError::KeyOutOfRange { key, num_of_leaves });
    }

    let mut digest = leaf_digest(data);

    // Single leaf: the proof is empty and the leaf is the root.
    if num_of_leaves == 1 {
        if !side_nodes.is_empty() {
            return Err(BridgeError::MalformedProofLength {
                expected: 0,
                got: side_nodes.len(),
            });
        }
        return if digest == *root {
            Ok(())
        } else {
            Err(BridgeError::InvalidProof)
        };
    }

    let expected = path_length_from_key(key, num_of_leaves);
    if side_nodes.len() != expected {
        return Err(BridgeError::MalformedProofLength {
            expected,
            got: side_nodes.len(),
        });
    }

    let side_node = |height: usize| {
        side_nodes
            .get(height - 1)
            .ok_or(BridgeError::MalformedProofLength {
                expected,
                got: side_nodes.len(),
            })
    };

    let key_wide = u128::from(key);
    let leaves_wide = u128::from(num_of_leaves);
    let mut height: usize = 1;
    // Last index of the largest complete subtree seen so far. The height-0
    // subtree is the leaf itself.
    let mut stable_end = key_wide;

    loop {
        let size = 1u128 << height;
        let subtree_start = (key_wide / size) * size;
        let subtree_end = subtree_start + size - 1;

        if subtree_end >= leaves_wide {
            break;
        }

        stable_end = subtree_end;

        let sibling = side_node(height)?;
        if key_wide - subtree_start < size / 2 {
            digest = node_digest(&digest, sibling);
        } else {
            digest = node_digest(sibling, &digest);
        }

        height += 1;
    }

    // An orphan subtree to the right was elevated to this height.
    if stable_end != leaves_wide - 1 {
        let sibling = side_node(height)?;
        digest = node_digest(&digest, sibling);
        height += 1;
    }

    while height - 1 < side_nodes.len() {
        digest = node_digest(&side_nodes[height - 1], &digest);
        height += 1;
    }

    if digest == *root {
        Ok(())
    } else {
        Err(BridgeError::InvalidProof)
    }
}

/// Height of the smallest perfect tree holding `num_of_leaves` (> 1) leaves.
fn tree_height(num_of_leaves: u64) -> usize {
    (u64::BITS - (num_of_leaves - 1).leading_zeros()) as usize
}

/// Number of leaves in the left subtree of a tree with `num_of_leaves` (> 1).
fn split_point(num_of_leaves: u64) -> u64 {
    1u64 << (tree_height(num_of_leaves) - 1)
}

/// Expected audit path length for leaf `key` in a tree of `num_of_leaves`.
///
/// Returns 0 for trees of at most one leaf.
pub fn path_length_from_key(key: u64, num_of_leaves: u64) -> usize {
    let mut key = key;
    let mut remaining = num_of_leaves;
    let mut length = 0;

    loop {
        if remaining <= 1 {
            return length;
        }

        let height = tree_height(remaining);
        let left = 1u64 << (height - 1);

        if key < left {
            return length + height;
        }
        if left == 1 {
            return length + 1;
        }

        length += 1;
        key -= left;
        remaining -= left;
    }
}

/// Root of the tree over `leaves`.
///
/// The empty tree's root is SHA-256 of the empty string.
pub fn compute_root<T: AsRef<[u8]>>(leaves: &[T]) -> Hash {
    let hashes: Vec<Hash> = leaves.iter().map(|l| leaf_digest(l.as_ref())).collect();
    subtree_root(&hashes)
}

fn subtree_root(hashes: &[Hash]) -> Hash {
    match hashes.len() {
        0 => hash_parts(&[]),
        1 => hashes[0],
        n => {
            let k = split_point(n as u64) as usize;
            node_digest(&subtree_root(&hashes[..k]), &subtree_root(&hashes[k..]))
        }
    }
}

/// Build the audit path for leaf `key`.
pub fn build_proof<T: AsRef<[u8]>>(leaves: &[T], key: u64) -> Result<BinaryMerkleProof, BridgeError> {
    let num_of_leaves = leaves.len() as u64;
    if key >= num_of_leaves {
        return Err(BridgeError::KeyOutOfRange { key, num_of_leaves });
    }

    let hashes: Vec<Hash> = leaves.iter().map(|l| leaf_digest(l.as_ref())).collect();
    let mut side_nodes = Vec::new();
    let mut slice = &hashes[..];
    let mut index = key as usize;

    // Top-down; reversed below so the leaf level comes first.
    while slice.len() > 1 {
        let k = split_point(slice.len() as u64) as usize;
        if index < k {
            side_nodes.push(subtree_root(&slice[k..]));
            slice = &slice[..k];
        } else {
            side_nodes.push(subtree_root(&slice[..k]));
            slice = &slice[k..];
            index -= k;
        }
    }
    side_nodes.reverse();

    Ok(BinaryMerkleProof {
        side_nodes,
        key,
        num_of_leaves,
    })
}
