//! # Bridge Benchmarks
//!
//! Performance benchmarks for the data availability bridge.

pub mod qc_18_da_bridge;
