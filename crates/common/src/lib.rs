//! Common implementations and shared functionality for the dstu4145 crates
//!
//! Holds the zeroizing containers used for agreement secrets and derived
//! key-encryption keys.

pub mod security;

// Re-export core security types
pub use security::SecretVec;
