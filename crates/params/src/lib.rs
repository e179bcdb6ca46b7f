//! Constant values for the dstu4145 crates
//!
//! Domain parameters of the polynomial-basis named curves and the sizes of
//! the fixed byte formats derived from them.

#![no_std]

pub mod dstu4145;

pub use dstu4145::{NamedCurve, NAMED_CURVES};
