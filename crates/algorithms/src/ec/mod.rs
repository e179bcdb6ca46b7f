//! Binary elliptic curves in DSTU 4145 form
//!
//! Curves are `y^2 + xy = x^3 + a*x^2 + b` over GF(2^m) with points in
//! affine coordinates. Scalar multiplication uses width-w NAF with cached
//! odd-multiple tables. Named curves are resolved through a memoized
//! registry.

pub mod curve;
pub mod point;
pub mod registry;
pub mod scalar;
pub mod wnaf;

#[cfg(test)]
mod tests;

pub use curve::{BasePoint, Curve, CurveSpec};
pub use point::Point;
pub use registry::{named_curves, resolve_curve, CurveRef};
pub use scalar::Scalar;
