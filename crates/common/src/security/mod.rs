//! Security primitives for handling sensitive agreement material

pub mod secret;

pub use secret::SecretVec;
