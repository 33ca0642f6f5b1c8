//! secp256k1 ECDSA Signature Adapter
//!
//! Implements `SignatureVerifier` and `DigestSigner` with `k256`.
//! Addresses are 33-byte compressed SEC1 points; signatures are 64-byte
//! `r ‖ s` with low-S (RFC 6979 deterministic nonces, SHA-256 prehash).

use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::{BridgeError, Hash, ValidatorSignature};
use crate::ports::{DigestSigner, SignatureVerifier};

/// secp256k1 ECDSA verifier.
#[derive(Clone, Debug, Default)]
pub struct Secp256k1Verifier;

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(&self, public_key: &[u8], message: &Hash, signature: &ValidatorSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_key) else {
            debug!("[qc-18] secp256k1 key is not a valid SEC1 point");
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature.as_bytes()) else {
            return false;
        };

        verifying_key.verify(message, &signature).is_ok()
    }
}

/// secp256k1 validator key.
pub struct Secp256k1Signer {
    signing_key: SigningKey,
}

impl Secp256k1Signer {
    /// Generate a random key.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Create from 32 secret key bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, BridgeError> {
        let bytes = Zeroizing::new(bytes);
        let signing_key = SigningKey::from_bytes((&*bytes).into())
            .map_err(|_| BridgeError::InvalidConfig("invalid secp256k1 secret key".to_string()))?;
        Ok(Self { signing_key })
    }
}

impl DigestSigner for Secp256k1Signer {
    fn address(&self) -> Vec<u8> {
        self.signing_key.verifying_key().to_sec1_bytes().to_vec()
    }

    fn sign_digest(&self, digest: &Hash) -> ValidatorSignature {
        let signature: Signature = self.signing_key.sign(digest);
        ValidatorSignature(signature.to_bytes().to_vec())
    }
}
