//! # Bridge Service
//!
//! Application service running the bridge state machine.
//!
//! Mutations hold the write lock for their whole read-validate-commit cycle,
//! so the host never observes a half-applied transition. The new state is
//! saved to the store before it replaces the in-memory copy.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::adapters::{verifier_for, InMemoryStateStore, TracingEventPublisher};
use crate::algorithms::{
    apply_put, binary_merkle, check_validator_signatures, empty_map_root, verify_checkpoint,
    verify_get,
};
use crate::config::BridgeConfig;
use crate::domain::{
    domain_separate_data_root_tuple_root, domain_separate_validator_set_hash,
    invariant_next_nonce, invariant_power_threshold, invariant_signature_count,
    invariant_slot_empty, invariant_tuple_root_not_empty, invariant_validator_count,
    BinaryMerkleProof, BridgeError, BridgeEvent, BridgeState, DataRootTuple,
    DataRootTupleRootSubmission, Hash, MapWitness, Validator, ValidatorSetUpdate, EMPTY_VALUE,
};
use crate::ports::{BridgeApi, DataAvailabilityOracle, EventPublisher, SignatureVerifier, StateStore};

/// Bridge Service - verifies and commits validator-set rotations and data
/// root tuple roots.
pub struct BridgeService {
    /// Configuration.
    config: BridgeConfig,
    /// Signature scheme of the validator set.
    verifier: Arc<dyn SignatureVerifier>,
    /// Durable copy of the state.
    store: Arc<dyn StateStore>,
    /// Consumer of committed events.
    events: Arc<dyn EventPublisher>,
    /// Current state (`None` until `init`).
    state: RwLock<Option<BridgeState>>,
}

impl BridgeService {
    /// Create an uninitialized service with in-memory persistence.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            verifier: verifier_for(config.signature_scheme),
            store: Arc::new(InMemoryStateStore::new()),
            events: Arc::new(TracingEventPublisher),
            state: RwLock::new(None),
            config,
        }
    }

    /// Open a service over `store`, resuming from its last committed state.
    pub fn open(config: BridgeConfig, store: Arc<dyn StateStore>) -> Result<Self, BridgeError> {
        config.validate()?;
        let state = store.load()?;
        if let Some(state) = &state {
            info!(
                "[qc-18] Resumed bridge at nonce {} (threshold {})",
                state.event_nonce, state.power_threshold
            );
        }
        Ok(Self {
            verifier: verifier_for(config.signature_scheme),
            store,
            events: Arc::new(TracingEventPublisher),
            state: RwLock::new(state),
            config,
        })
    }

    /// Replace the signature verifier.
    pub fn with_verifier(mut self, verifier: Arc<dyn SignatureVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Replace the event publisher.
    pub fn with_events(mut self, events: Arc<dyn EventPublisher>) -> Self {
        self.events = events;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Internal: checks shared by both signed transitions.
    ///
    /// Returns the current state with the validator set confirmed against its
    /// checkpoint.
    fn check_signed_transition(
        &self,
        state: &Option<BridgeState>,
        new_nonce: u64,
        validator_set_nonce: u64,
        validators: &[Validator],
        signature_count: usize,
    ) -> Result<BridgeState, BridgeError> {
        let state = state.as_ref().ok_or(BridgeError::NotInitialized)?;
        invariant_next_nonce(state, new_nonce)?;
        invariant_signature_count(validators.len(), signature_count)?;
        invariant_validator_count(validators.len(), self.config.max_validators)?;
        verify_checkpoint(state, validator_set_nonce, validators)?;
        Ok(state.clone())
    }

    /// Internal: validate a rotation and build the resulting state.
    fn prepare_update(
        &self,
        state: &Option<BridgeState>,
        update: &ValidatorSetUpdate,
    ) -> Result<BridgeState, BridgeError> {
        let state = self.check_signed_transition(
            state,
            update.new_nonce,
            update.old_nonce,
            &update.current_validator_set,
            update.signatures.len(),
        )?;
        invariant_power_threshold(update.new_power_threshold)?;

        let new_checkpoint = domain_separate_validator_set_hash(
            &state.bridge_id,
            update.new_nonce,
            update.new_power_threshold,
            &update.new_validator_set_hash,
        );
        check_validator_signatures(
            self.verifier.as_ref(),
            &update.current_validator_set,
            &update.signatures,
            &new_checkpoint,
            state.power_threshold,
        )?;

        Ok(state.with_validator_set(new_checkpoint, update.new_power_threshold, update.new_nonce))
    }

    /// Internal: validate a tuple-root submission and build the resulting state.
    fn prepare_submission(
        &self,
        state: &Option<BridgeState>,
        submission: &DataRootTupleRootSubmission,
    ) -> Result<BridgeState, BridgeError> {
        let state = self.check_signed_transition(
            state,
            submission.new_nonce,
            submission.validator_set_nonce,
            &submission.current_validator_set,
            submission.signatures.len(),
        )?;
        invariant_tuple_root_not_empty(&submission.data_root_tuple_root)?;
        invariant_slot_empty(submission.new_nonce, &submission.value_before)?;

        let digest = domain_separate_data_root_tuple_root(
            &state.bridge_id,
            submission.new_nonce,
            &submission.data_root_tuple_root,
        );
        check_validator_signatures(
            self.verifier.as_ref(),
            &submission.current_validator_set,
            &submission.signatures,
            &digest,
            state.power_threshold,
        )?;

        let attestation_root = apply_put(
            &state.attestation_root,
            submission.new_nonce,
            &submission.value_before,
            &submission.data_root_tuple_root,
            &submission.map_witness,
        )?;

        Ok(state.with_attestation(attestation_root, submission.new_nonce))
    }

    /// Internal: persist then publish `next`.
    fn commit(
        &self,
        slot: &mut Option<BridgeState>,
        next: BridgeState,
        event: BridgeEvent,
    ) -> Result<(), BridgeError> {
        self.store.save(&next)?;
        *slot = Some(next);
        self.events.publish(event);
        Ok(())
    }
}

impl BridgeApi for BridgeService {
    fn init(
        &self,
        bridge_id: Hash,
        nonce: u64,
        power_threshold: u64,
        validator_set_hash: Hash,
    ) -> Result<(), BridgeError> {
        let mut slot = self.state.write();
        if slot.is_some() {
            warn!("[qc-18] Rejected second init");
            return Err(BridgeError::AlreadyInitialized);
        }
        invariant_power_threshold(power_threshold)?;

        let state = BridgeState::genesis(
            bridge_id,
            nonce,
            power_threshold,
            &validator_set_hash,
            empty_map_root(),
        );
        self.commit(
            &mut slot,
            state,
            BridgeEvent::ValidatorSetUpdated {
                nonce,
                power_threshold,
                validator_set_hash,
            },
        )?;

        info!(
            "[qc-18] Bridge {} initialized at nonce {} (threshold {})",
            hex::encode(bridge_id),
            nonce,
            power_threshold
        );
        Ok(())
    }

    fn update_validator_set(&self, update: ValidatorSetUpdate) -> Result<(), BridgeError> {
        let mut slot = self.state.write();

        let result = self.prepare_update(&slot, &update);
        let next = match result {
            Ok(next) => next,
            Err(e) => {
                warn!("[qc-18] Validator set update {} rejected: {}", update.new_nonce, e);
                return Err(e);
            }
        };

        self.commit(
            &mut slot,
            next,
            BridgeEvent::ValidatorSetUpdated {
                nonce: update.new_nonce,
                power_threshold: update.new_power_threshold,
                validator_set_hash: update.new_validator_set_hash,
            },
        )?;

        info!(
            "[qc-18] Validator set updated at nonce {} (threshold {})",
            update.new_nonce, update.new_power_threshold
        );
        Ok(())
    }

    fn submit_data_root_tuple_root(
        &self,
        submission: DataRootTupleRootSubmission,
    ) -> Result<(), BridgeError> {
        let mut slot = self.state.write();

        let result = self.prepare_submission(&slot, &submission);
        let next = match result {
            Ok(next) => next,
            Err(e) => {
                warn!(
                    "[qc-18] Tuple root submission {} rejected: {}",
                    submission.new_nonce, e
                );
                return Err(e);
            }
        };

        self.commit(
            &mut slot,
            next,
            BridgeEvent::DataRootTupleRootSubmitted {
                nonce: submission.new_nonce,
                data_root_tuple_root: submission.data_root_tuple_root,
            },
        )?;

        info!(
            "[qc-18] Data root tuple root committed at nonce {}",
            submission.new_nonce
        );
        Ok(())
    }

    fn state(&self) -> Option<BridgeState> {
        self.state.read().clone()
    }
}

impl DataAvailabilityOracle for BridgeService {
    fn verify_attestation(
        &self,
        map_witness: &MapWitness,
        tuple_root_nonce: u64,
        tuple: &DataRootTuple,
        proof: &BinaryMerkleProof,
        claimed_root: &Hash,
    ) -> bool {
        let guard = self.state.read();
        let Some(state) = guard.as_ref() else {
            return false;
        };

        // Not yet committed.
        if tuple_root_nonce > state.event_nonce {
            debug!(
                "[qc-18] Attestation nonce {} ahead of bridge nonce {}",
                tuple_root_nonce, state.event_nonce
            );
            return false;
        }
        if *claimed_root == EMPTY_VALUE {
            return false;
        }
        if !verify_get(&state.attestation_root, tuple_root_nonce, claimed_root, map_witness) {
            debug!("[qc-18] Map witness mismatch at nonce {}", tuple_root_nonce);
            return false;
        }

        binary_merkle::verify(claimed_root, proof, &tuple.encode())
    }
}
