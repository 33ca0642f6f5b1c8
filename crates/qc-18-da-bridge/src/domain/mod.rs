//! # Domain Module
//!
//! Core domain types for the Data Availability Bridge.

pub mod digest;
pub mod entities;
pub mod errors;
pub mod events;
pub mod invariants;
pub mod value_objects;

pub use digest::*;
pub use entities::*;
pub use errors::*;
pub use events::*;
pub use invariants::*;
pub use value_objects::*;
