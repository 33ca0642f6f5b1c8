//! Ed25519 Signature Adapter
//!
//! Implements `SignatureVerifier` and `DigestSigner` with `ed25519-dalek`.
//! Addresses are the 32-byte compressed Edwards point.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::{Hash, ValidatorSignature};
use crate::ports::{DigestSigner, SignatureVerifier};

/// Ed25519 verifier (strict: rejects small-order keys and malleable encodings).
#[derive(Clone, Debug, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, public_key: &[u8], message: &Hash, signature: &ValidatorSignature) -> bool {
        let Ok(key_bytes) = <[u8; 32]>::try_from(public_key) else {
            debug!("[qc-18] Ed25519 key has wrong length: {}", public_key.len());
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
            debug!("[qc-18] Ed25519 key is not a valid point");
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature.as_bytes()) else {
            return false;
        };

        verifying_key.verify_strict(message, &signature).is_ok()
    }
}

/// Ed25519 validator key.
pub struct Ed25519Signer {
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /// Generate a random key.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Create from a 32-byte secret seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let seed = Zeroizing::new(seed);
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }
}

impl DigestSigner for Ed25519Signer {
    fn address(&self) -> Vec<u8> {
        self.signing_key.verifying_key().to_bytes().to_vec()
    }

    fn sign_digest(&self, digest: &Hash) -> ValidatorSignature {
        ValidatorSignature(self.signing_key.sign(digest).to_bytes().to_vec())
    }
}
