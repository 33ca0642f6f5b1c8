//! # Outbound Ports
//!
//! Traits for the bridge's external collaborators: the signature scheme,
//! the authenticated attestation map, the state store and event consumers.

use parking_lot::Mutex;

use crate::domain::{
    hash_parts, BridgeError, BridgeEvent, BridgeState, Hash, MapWitness, ValidatorSignature,
};

/// Signature verification capability - outbound port.
///
/// The bridge treats key formats and curve arithmetic as opaque.
pub trait SignatureVerifier: Send + Sync {
    /// Does `signature` by `public_key` cover `message`?
    fn verify(&self, public_key: &[u8], message: &Hash, signature: &ValidatorSignature) -> bool;
}

/// Validator-side signing capability (relayers and tests).
pub trait DigestSigner: Send + Sync {
    /// Public key identifier placed in the validator set.
    fn address(&self) -> Vec<u8>;

    /// Sign a bridge message digest.
    fn sign_digest(&self, digest: &Hash) -> ValidatorSignature;
}

/// Authenticated append-only map (nonce -> data root tuple root) - outbound port.
///
/// The bridge only stores the root; whoever holds the full map supplies
/// witnesses with each submission.
pub trait AuthenticatedMap: Send + Sync {
    /// Current root.
    fn root(&self) -> Hash;

    /// Value at `key` (the empty value if unwritten).
    fn get(&self, key: u64) -> Hash;

    /// Value at `key` together with its witness.
    fn prove_get(&self, key: u64) -> (Hash, MapWitness);

    /// Write `value` at `key`, returning the new root.
    ///
    /// # Errors
    /// * `BridgeError::SlotOccupied` - the slot was already written
    fn insert(&mut self, key: u64, value: Hash) -> Result<Hash, BridgeError>;
}

/// Persistence of the five-field bridge state - outbound port.
pub trait StateStore: Send + Sync {
    /// Load the last committed state, if any.
    fn load(&self) -> Result<Option<BridgeState>, BridgeError>;

    /// Durably record a new state. Called before the state becomes visible.
    fn save(&self, state: &BridgeState) -> Result<(), BridgeError>;
}

/// Consumer of committed bridge events - outbound port.
pub trait EventPublisher: Send + Sync {
    /// Deliver an event. Must not fail the already-committed transition.
    fn publish(&self, event: BridgeEvent);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock signature scheme: a valid signature is `SHA-256(address ‖ digest)`.
#[derive(Clone, Debug, Default)]
pub struct MockSignatureVerifier;

impl MockSignatureVerifier {
    /// Produce the signature this verifier accepts.
    pub fn sign(address: &[u8], digest: &Hash) -> ValidatorSignature {
        ValidatorSignature(hash_parts(&[address, digest]).to_vec())
    }
}

impl SignatureVerifier for MockSignatureVerifier {
    fn verify(&self, public_key: &[u8], message: &Hash, signature: &ValidatorSignature) -> bool {
        Self::sign(public_key, message) == *signature
    }
}

/// Mock signer matching [`MockSignatureVerifier`].
#[derive(Clone, Debug)]
pub struct MockSigner {
    /// Address used as the public key.
    pub address: Vec<u8>,
}

impl MockSigner {
    /// Signer with a one-byte-seeded 32-byte address.
    pub fn new(seed: u8) -> Self {
        Self {
            address: vec![seed; 32],
        }
    }
}

impl DigestSigner for MockSigner {
    fn address(&self) -> Vec<u8> {
        self.address.clone()
    }

    fn sign_digest(&self, digest: &Hash) -> ValidatorSignature {
        MockSignatureVerifier::sign(&self.address, digest)
    }
}

/// Mock state store.
#[derive(Default)]
pub struct MockStateStore {
    /// Last saved state.
    pub saved: Mutex<Option<BridgeState>>,
    /// Should saves fail?
    pub should_fail: bool,
}

impl StateStore for MockStateStore {
    fn load(&self) -> Result<Option<BridgeState>, BridgeError> {
        Ok(self.saved.lock().clone())
    }

    fn save(&self, state: &BridgeState) -> Result<(), BridgeError> {
        if self.should_fail {
            return Err(BridgeError::Storage("Mock failure".to_string()));
        }
        *self.saved.lock() = Some(state.clone());
        Ok(())
    }
}
