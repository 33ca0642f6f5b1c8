//! # Shared Fixtures
//!
//! A scripted relayer that keeps the off-bridge view (validator keys,
//! attestation map, tuple batches) in step with a `BridgeService`.

use std::collections::BTreeMap;

use qc_18_da_bridge::{
    build_proof, compute_root, compute_validator_set_hash, domain_separate_data_root_tuple_root,
    domain_separate_validator_set_hash, AuthenticatedMap, BinaryMerkleProof, DataRootTuple,
    DataRootTupleRootSubmission, DigestSigner, Ed25519Signer, Hash, InMemoryAttestationMap,
    MapWitness, Secp256k1Signer, Validator, ValidatorSetUpdate, ValidatorSignature,
};
use sha2::{Digest, Sha256};

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `count` Ed25519 validator keys derived from `seed`.
pub fn ed25519_signers(seed: u8, count: usize) -> Vec<Box<dyn DigestSigner>> {
    (0..count)
        .map(|i| {
            let mut secret = [seed; 32];
            secret[..2].copy_from_slice(&(i as u16).to_be_bytes());
            Box::new(Ed25519Signer::from_seed(secret)) as Box<dyn DigestSigner>
        })
        .collect()
}

/// `count` secp256k1 validator keys derived from `seed`.
pub fn secp256k1_signers(seed: u8, count: usize) -> Vec<Box<dyn DigestSigner>> {
    (0..count)
        .map(|i| {
            let mut secret = [seed.clamp(1, 0x7F); 32];
            secret[30..].copy_from_slice(&(i as u16 + 1).to_be_bytes());
            Box::new(Secp256k1Signer::from_bytes(secret).expect("valid secret"))
                as Box<dyn DigestSigner>
        })
        .collect()
}

/// Consecutive data root tuples starting at `start_height`.
pub fn tuple_batch(start_height: u64, count: usize) -> Vec<DataRootTuple> {
    (0..count as u64)
        .map(|i| {
            let height = start_height + i;
            let data_root: Hash = Sha256::digest(height.to_be_bytes()).into();
            DataRootTuple::new(height, data_root)
        })
        .collect()
}

/// Everything `verify_attestation` needs for one tuple.
pub struct Attestation {
    /// Witness for the tuple root's slot.
    pub map_witness: MapWitness,
    /// Slot nonce.
    pub nonce: u64,
    /// The tuple being proven.
    pub tuple: DataRootTuple,
    /// Inclusion proof under the tuple root.
    pub proof: BinaryMerkleProof,
    /// Tuple root stored at the slot.
    pub root: Hash,
}

/// Off-bridge relayer state.
pub struct Relayer {
    /// Bridge instance the relayer serves.
    pub bridge_id: Hash,
    /// Keys of the current validator set, in set order.
    pub signers: Vec<Box<dyn DigestSigner>>,
    /// Current validator set.
    pub validators: Vec<Validator>,
    /// Current power threshold.
    pub power_threshold: u64,
    /// Nonce at which the current set was checkpointed.
    pub validator_set_nonce: u64,
    /// Last committed event nonce.
    pub nonce: u64,
    /// Full attestation map.
    pub map: InMemoryAttestationMap,
    /// Encoded tuple batches by nonce.
    pub batches: BTreeMap<u64, Vec<[u8; 64]>>,
}

impl Relayer {
    /// Relayer for a fresh bridge.
    pub fn new(
        bridge_id: Hash,
        signers: Vec<Box<dyn DigestSigner>>,
        powers: &[u64],
        power_threshold: u64,
    ) -> Self {
        let validators = validators_for(&signers, powers);
        Self {
            bridge_id,
            signers,
            validators,
            power_threshold,
            validator_set_nonce: 0,
            nonce: 0,
            map: InMemoryAttestationMap::new(),
            batches: BTreeMap::new(),
        }
    }

    /// Digest of the current validator set.
    pub fn validator_set_hash(&self) -> Hash {
        compute_validator_set_hash(&self.validators)
    }

    /// Signatures from the signers at `who`; everyone else abstains.
    pub fn sign(&self, digest: &Hash, who: &[usize]) -> Vec<ValidatorSignature> {
        self.signers
            .iter()
            .enumerate()
            .map(|(i, signer)| {
                if who.contains(&i) {
                    signer.sign_digest(digest)
                } else {
                    ValidatorSignature::absent()
                }
            })
            .collect()
    }

    /// Rotation to `new_validators`, signed by the current signers at `who`.
    pub fn rotation(
        &self,
        new_validators: &[Validator],
        new_power_threshold: u64,
        who: &[usize],
    ) -> ValidatorSetUpdate {
        let new_nonce = self.nonce + 1;
        let new_validator_set_hash = compute_validator_set_hash(new_validators);
        let checkpoint = domain_separate_validator_set_hash(
            &self.bridge_id,
            new_nonce,
            new_power_threshold,
            &new_validator_set_hash,
        );
        ValidatorSetUpdate {
            new_nonce,
            old_nonce: self.validator_set_nonce,
            new_power_threshold,
            new_validator_set_hash,
            current_validator_set: self.validators.clone(),
            signatures: self.sign(&checkpoint, who),
        }
    }

    /// Record a committed rotation.
    pub fn rotated(&mut self, signers: Vec<Box<dyn DigestSigner>>, powers: &[u64], threshold: u64) {
        self.nonce += 1;
        self.validator_set_nonce = self.nonce;
        self.validators = validators_for(&signers, powers);
        self.signers = signers;
        self.power_threshold = threshold;
    }

    /// Submission of a tuple root over `tuples`, signed by the signers at `who`.
    pub fn submission(&self, tuples: &[DataRootTuple], who: &[usize]) -> DataRootTupleRootSubmission {
        let new_nonce = self.nonce + 1;
        let encoded: Vec<[u8; 64]> = tuples.iter().map(DataRootTuple::encode).collect();
        let data_root_tuple_root = compute_root(&encoded);
        let digest =
            domain_separate_data_root_tuple_root(&self.bridge_id, new_nonce, &data_root_tuple_root);
        let (value_before, map_witness) = self.map.prove_get(new_nonce);
        DataRootTupleRootSubmission {
            new_nonce,
            validator_set_nonce: self.validator_set_nonce,
            data_root_tuple_root,
            current_validator_set: self.validators.clone(),
            signatures: self.sign(&digest, who),
            map_witness,
            value_before,
        }
    }

    /// Record a committed submission.
    pub fn submitted(&mut self, tuples: &[DataRootTuple]) {
        let encoded: Vec<[u8; 64]> = tuples.iter().map(DataRootTuple::encode).collect();
        self.nonce += 1;
        self.map
            .insert(self.nonce, compute_root(&encoded))
            .expect("slot free");
        self.batches.insert(self.nonce, encoded);
    }

    /// Attestation for tuple `index` of the batch committed at `nonce`.
    pub fn attestation(&self, nonce: u64, index: usize) -> Attestation {
        let encoded = &self.batches[&nonce];
        let (root, map_witness) = self.map.prove_get(nonce);
        let mut height = [0u8; 8];
        height.copy_from_slice(&encoded[index][24..32]);
        let mut data_root = [0u8; 32];
        data_root.copy_from_slice(&encoded[index][32..]);
        Attestation {
            map_witness,
            nonce,
            tuple: DataRootTuple::new(u64::from_be_bytes(height), data_root),
            proof: build_proof(encoded, index as u64).expect("index in range"),
            root,
        }
    }
}

/// Validator set for `signers` with the given powers.
pub fn validators_for(signers: &[Box<dyn DigestSigner>], powers: &[u64]) -> Vec<Validator> {
    signers
        .iter()
        .zip(powers)
        .map(|(signer, power)| Validator::new(signer.address(), *power))
        .collect()
}
