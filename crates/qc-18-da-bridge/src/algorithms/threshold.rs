//! # Threshold Signature Verification
//!
//! API contract: callers order signers by descending power. The verifier
//! checks the shortest prefix whose power crosses the threshold and ignores
//! every entry after it, including their signatures.
//!
//! A validator that did not sign is represented by an absent (empty)
//! signature: it contributes no power and is not an error. Any present
//! signature that fails verification aborts the check.

use tracing::debug;

use crate::domain::{invariant_signature_count, BridgeError, Hash, Validator, ValidatorSignature};
use crate::ports::SignatureVerifier;

/// Confirm that signers in `validators` order reach `power_threshold` over
/// `digest`.
///
/// Returns the cumulative power of the verified prefix. Fails on the first
/// invalid signature in that prefix; there is no partial credit. The
/// threshold is a lower bound and is only ever compared, never divided.
pub fn check_validator_signatures<V: SignatureVerifier + ?Sized>(
    verifier: &V,
    validators: &[Validator],
    signatures: &[ValidatorSignature],
    digest: &Hash,
    power_threshold: u64,
) -> Result<u64, BridgeError> {
    invariant_signature_count(validators.len(), signatures.len())?;

    let mut cumulative_power = 0u64;

    for (index, (validator, signature)) in validators.iter().zip(signatures).enumerate() {
        if signature.is_absent() {
            continue;
        }

        if !verifier.verify(&validator.address, digest, signature) {
            return Err(BridgeError::SignatureInvalid { index });
        }

        cumulative_power = cumulative_power.saturating_add(validator.power);
        if cumulative_power >= power_threshold {
            break;
        }
    }

    if cumulative_power < power_threshold {
        return Err(BridgeError::InsufficientSignaturePower {
            got: cumulative_power,
            required: power_threshold,
        });
    }

    debug!(
        "[qc-18] Threshold reached: {}/{} power",
        cumulative_power, power_threshold
    );
    Ok(cumulative_power)
}
