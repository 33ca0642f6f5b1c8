//! # Integration Tests
//!
//! End-to-end bridge flows with real signature schemes.
