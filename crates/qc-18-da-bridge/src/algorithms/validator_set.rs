//! # Validator Set Digest
//!
//! Order is significant and not canonicalized: a relayer must supply the
//! validators in exactly the order used when the checkpoint was created.

use sha2::{Digest, Sha256};

use crate::domain::{
    domain_separate_validator_set_hash, encode_word, BridgeError, BridgeState, Hash, Validator,
};

/// Digest over `(len(address) ‖ address ‖ word(power))` for each validator,
/// in the supplied order.
pub fn compute_validator_set_hash(validators: &[Validator]) -> Hash {
    let mut hasher = Sha256::new();
    for validator in validators {
        // Addresses are variable width; the prefix keeps the encoding injective.
        hasher.update((validator.address.len() as u32).to_be_bytes());
        hasher.update(&validator.address);
        hasher.update(encode_word(validator.power));
    }
    hasher.finalize().into()
}

/// Sum of all voting power (saturating).
pub fn total_power(validators: &[Validator]) -> u64 {
    validators
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(v.power))
}

/// Check that `validators`, checkpointed at `nonce` under the stored
/// threshold, reproduce the stored checkpoint.
pub fn verify_checkpoint(
    state: &BridgeState,
    nonce: u64,
    validators: &[Validator],
) -> Result<Hash, BridgeError> {
    let validator_set_hash = compute_validator_set_hash(validators);
    let checkpoint = domain_separate_validator_set_hash(
        &state.bridge_id,
        nonce,
        state.power_threshold,
        &validator_set_hash,
    );

    if checkpoint != state.checkpoint {
        return Err(BridgeError::ValidatorSetMismatch);
    }
    Ok(validator_set_hash)
}
