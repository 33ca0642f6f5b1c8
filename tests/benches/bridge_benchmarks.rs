//! # Data Availability Bridge Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Inclusion proof, 65,536 tuples | < 50μs |
//! | Threshold check, 1,024 validators | < 50ms |
//! | Map witness check | < 50μs |

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_bridge(c: &mut Criterion) {
    qc_tests::benchmarks::qc_18_da_bridge::register_benchmarks(c);
}

criterion_group!(benches, bench_bridge);
criterion_main!(benches);
