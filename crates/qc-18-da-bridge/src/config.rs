//! # Bridge Configuration
//!
//! Configuration for the data availability bridge service.

use serde::{Deserialize, Serialize};

use crate::domain::{BridgeError, DEFAULT_MAX_VALIDATORS};

/// Signature scheme used by the validator set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureScheme {
    /// Ed25519 (32-byte keys, 64-byte signatures).
    #[default]
    Ed25519,
    /// secp256k1 ECDSA (33-byte compressed keys, 64-byte signatures).
    Secp256k1,
}

/// Bridge configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Upper bound on validator set size accepted in one call.
    pub max_validators: usize,

    /// Scheme used to verify validator signatures.
    pub signature_scheme: SignatureScheme,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_validators: DEFAULT_MAX_VALIDATORS,
            signature_scheme: SignatureScheme::Ed25519,
        }
    }
}

impl BridgeConfig {
    /// Create a config for testing (small validator sets).
    pub fn for_testing() -> Self {
        Self {
            max_validators: 16,
            signature_scheme: SignatureScheme::Ed25519,
        }
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.max_validators == 0 {
            return Err(BridgeError::InvalidConfig(
                "max_validators must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
