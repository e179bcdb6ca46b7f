//! DSTU 4145 digital signatures and key agreement
//!
//! This crate implements the protocol layer on top of the binary curve
//! arithmetic: private and public keys, signing with nonce retry,
//! verification, public key validation, cofactor Diffie-Hellman and the
//! key-encryption-key derivation used for key wrapping.

pub mod traditional;

pub use traditional::dstu4145::{
    CurveKeys, Dstu4145, KeyRejection, PrivateKey, PublicKey, PublicKeyInput, Signature,
    SignatureRejection,
};
