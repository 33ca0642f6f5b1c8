//! # QC-18 Data Availability Bridge Benchmarks
//!
//! Cost drivers to watch:
//! - Inclusion proof verification grows with log2(tuples per batch)
//! - Threshold checks grow with the signer prefix needed to cross threshold
//! - Map witness checks are a fixed 64 node hashes
//!
//! Brutal Conditions:
//! - Batches up to 65,536 tuples
//! - Validator sets up to 1,024 members

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use qc_18_da_bridge::{
    build_proof, check_validator_signatures, compute_root, verify, verify_get, AuthenticatedMap,
    DataRootTuple, Ed25519Verifier,
};
use std::time::Duration;

use crate::fixtures::{ed25519_signers, tuple_batch, Relayer};

pub fn brutal_inclusion_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/brutal/inclusion_proof");

    for size in [16usize, 1_024, 65_536] {
        let encoded: Vec<[u8; 64]> = tuple_batch(1, size).iter().map(DataRootTuple::encode).collect();
        let root = compute_root(&encoded);
        let key = (size - 1) as u64;
        let proof = build_proof(&encoded, key).expect("key in range");

        group.bench_with_input(BenchmarkId::new("verify", size), &size, |b, _| {
            b.iter(|| black_box(verify(&root, &proof, &encoded[size - 1])))
        });
    }

    group.finish();
}

pub fn brutal_tuple_root_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/brutal/tuple_root");
    group.measurement_time(Duration::from_secs(10));

    for size in [256usize, 4_096] {
        let encoded: Vec<[u8; 64]> = tuple_batch(1, size).iter().map(DataRootTuple::encode).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("compute_root", size), &encoded, |b, leaves| {
            b.iter(|| black_box(compute_root(leaves)))
        });
    }

    group.finish();
}

pub fn brutal_threshold_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/brutal/threshold");
    group.measurement_time(Duration::from_secs(10));

    for size in [4usize, 64, 1_024] {
        let powers = vec![1u64; size];
        // Two thirds plus one must sign.
        let threshold = (size as u64 * 2) / 3 + 1;
        let relayer = Relayer::new([0xBE; 32], ed25519_signers(1, size), &powers, threshold);
        let digest = [0x5A; 32];
        let who: Vec<usize> = (0..threshold as usize).collect();
        let signatures = relayer.sign(&digest, &who);

        group.throughput(Throughput::Elements(threshold));
        group.bench_with_input(BenchmarkId::new("ed25519", size), &signatures, |b, sigs| {
            b.iter(|| {
                black_box(check_validator_signatures(
                    &Ed25519Verifier,
                    &relayer.validators,
                    sigs,
                    &digest,
                    threshold,
                ))
            })
        });
    }

    group.finish();
}

pub fn brutal_map_witness(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/brutal/map_witness");

    let mut relayer = Relayer::new([0xBE; 32], ed25519_signers(2, 1), &[1], 1);
    for start in 0..256u64 {
        relayer.submitted(&tuple_batch(start * 4, 4));
    }
    let root = relayer.map.root();
    let (value, witness) = relayer.map.prove_get(128);

    group.bench_function("verify_get", |b| {
        b.iter(|| black_box(verify_get(&root, 128, &value, &witness)))
    });
    group.bench_function("prove_get", |b| {
        b.iter(|| black_box(relayer.map.prove_get(128)))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_inclusion_proofs(c);
    brutal_tuple_root_construction(c);
    brutal_threshold_check(c);
    brutal_map_witness(c);
}
