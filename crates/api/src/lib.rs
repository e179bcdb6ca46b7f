//! Public API traits and types for the dstu4145 crates
//!
//! This crate provides the error taxonomy shared by every layer and the
//! capability traits the protocol layer consumes: a signature scheme
//! interface and the injected key-derivation pieces used when building a
//! key-encryption key.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{KeyDerivation, SharedInfoEncoder, Signature};

// Re-export trait modules for direct access
pub use traits::{agreement, signature};
