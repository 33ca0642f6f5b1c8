//! In-memory attestation map.
//!
//! Holds the full sparse Merkle map off the bridge so relayers can produce
//! the witnesses a submission needs. Only non-empty subtrees are stored;
//! everything else falls back to the precomputed empty digests.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::algorithms::{empty_subtree_digests, map_leaf_digest, map_node_digest, MAP_HEIGHT};
use crate::domain::{BridgeError, Hash, MapWitness, EMPTY_VALUE};
use crate::ports::AuthenticatedMap;

/// Append-only sparse Merkle map keyed by nonce.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAttestationMap {
    values: BTreeMap<u64, Hash>,
    /// (subtree height, index at that height) -> digest
    nodes: HashMap<(usize, u64), Hash>,
}

impl InMemoryAttestationMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn node(&self, height: usize, index: u64) -> Hash {
        self.nodes
            .get(&(height, index))
            .copied()
            .unwrap_or(empty_subtree_digests()[height])
    }
}

impl AuthenticatedMap for InMemoryAttestationMap {
    fn root(&self) -> Hash {
        self.node(MAP_HEIGHT, 0)
    }

    fn get(&self, key: u64) -> Hash {
        self.values.get(&key).copied().unwrap_or(EMPTY_VALUE)
    }

    fn prove_get(&self, key: u64) -> (Hash, MapWitness) {
        let mut witness = MapWitness {
            is_lefts: Vec::with_capacity(MAP_HEIGHT),
            siblings: Vec::with_capacity(MAP_HEIGHT),
        };
        for level in 0..MAP_HEIGHT {
            let index = key >> level;
            witness.is_lefts.push(index & 1 == 0);
            witness.siblings.push(self.node(level, index ^ 1));
        }
        (self.get(key), witness)
    }

    fn insert(&mut self, key: u64, value: Hash) -> Result<Hash, BridgeError> {
        if self.values.contains_key(&key) {
            return Err(BridgeError::SlotOccupied { nonce: key });
        }
        if value == EMPTY_VALUE {
            return Err(BridgeError::EmptyDataRootTupleRoot);
        }

        self.values.insert(key, value);
        let mut digest = map_leaf_digest(&value);
        self.nodes.insert((0, key), digest);

        for level in 0..MAP_HEIGHT {
            let index = key >> level;
            let sibling = self.node(level, index ^ 1);
            digest = if index & 1 == 0 {
                map_node_digest(&digest, &sibling)
            } else {
                map_node_digest(&sibling, &digest)
            };
            self.nodes.insert((level + 1, index >> 1), digest);
        }

        debug!("[qc-18] Attestation map slot {} written", key);
        Ok(digest)
    }
}
