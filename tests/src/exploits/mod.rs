//! # Exploit Simulations
//!
//! Attacks a malicious relayer or validator minority could attempt against
//! the bridge, each expected to be rejected.
