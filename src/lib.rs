//! # dstu4145
//!
//! Elliptic-curve cryptography over binary fields GF(2^m) per the Ukrainian
//! DSTU 4145-2002 standard.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dstu4145 = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): signatures, public key validation and key agreement
//! - `serde`: deserialize curve definitions from configuration files
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dstu4145-api`]: error type and public traits
//! - [`dstu4145-common`]: zeroizing containers for secrets
//! - [`dstu4145-params`]: the named DSTU 4145 curves
//! - [`dstu4145-algorithms`]: field arithmetic, points and wNAF multiplication
//! - [`dstu4145-sign`]: keys, signatures and key agreement

pub use dstu4145_algorithms as algorithms;
pub use dstu4145_api as api;
pub use dstu4145_common as common;
pub use dstu4145_params as params;

#[cfg(feature = "sign")]
pub use dstu4145_sign as sign;

// Callers need these for `keypair`/`sign` randomness and for wiping exported keys
pub use rand;
pub use zeroize;

/// Common imports for dstu4145 users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{KeyDerivation, SharedInfoEncoder, Signature as SignatureScheme};

    pub use crate::common::SecretVec;

    pub use crate::algorithms::ec::{resolve_curve, Curve, CurveRef, CurveSpec, Point, Scalar};
    pub use crate::algorithms::{BinaryField, FieldElement, FieldInput};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        CurveKeys, Dstu4145, KeyRejection, PrivateKey, PublicKey, PublicKeyInput, Signature,
        SignatureRejection,
    };
}
