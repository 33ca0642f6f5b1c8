//! # Adapters Layer (Hexagonal Architecture)
//!
//! Concrete implementations of the outbound ports: signature schemes, the
//! off-bridge attestation map, state persistence and event delivery.

mod attestation_map;
mod ed25519;
mod event_log;
mod secp256k1;
mod state_store;

use std::sync::Arc;

pub use attestation_map::InMemoryAttestationMap;
pub use ed25519::{Ed25519Signer, Ed25519Verifier};
pub use event_log::{InMemoryEventLog, TracingEventPublisher};
pub use secp256k1::{Secp256k1Signer, Secp256k1Verifier};
pub use state_store::InMemoryStateStore;

use crate::config::SignatureScheme;
use crate::ports::SignatureVerifier;

/// Verifier for the configured scheme.
pub fn verifier_for(scheme: SignatureScheme) -> Arc<dyn SignatureVerifier> {
    match scheme {
        SignatureScheme::Ed25519 => Arc::new(Ed25519Verifier),
        SignatureScheme::Secp256k1 => Arc::new(Secp256k1Verifier),
    }
}
