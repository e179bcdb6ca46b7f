//! Capability traits consumed and implemented by the dstu4145 crates

pub mod agreement;
pub mod signature;

pub use agreement::{KeyDerivation, SharedInfoEncoder};
pub use signature::Signature;
