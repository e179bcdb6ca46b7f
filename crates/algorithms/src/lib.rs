//! Field and curve arithmetic for DSTU 4145
//!
//! This crate provides arithmetic in GF(2^m) with sparse reduction
//! polynomials, the affine point group of DSTU 4145 curves with point
//! compression, windowed-NAF scalar multiplication and the registry of
//! named curves.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Binary field arithmetic
pub mod gf2m;
pub use gf2m::{BinaryField, FieldElement, FieldInput};

// Curve group
pub mod ec;
pub use ec::{resolve_curve, Curve, CurveRef, CurveSpec, Point, Scalar};
