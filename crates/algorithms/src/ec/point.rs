//! Affine points on `y^2 + xy = x^3 + a*x^2 + b`
//!
//! The point at infinity is the `(0, 0)` sentinel. `(0, 0)` never lies on a
//! curve with `b != 0`, and every group operation checks for it explicitly.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::curve::Curve;
use super::scalar::Scalar;
use super::wnaf::{self, PrecomputedTable};
use crate::gf2m::FieldElement;

/// Lazily filled, shared slot for a point's wNAF table
pub(crate) type PrecomputeSlot = Arc<RwLock<Option<Arc<PrecomputedTable>>>>;

/// Point on a binary curve in affine coordinates
///
/// Clones share the precomputed multiples table. Constructing a point does
/// not check that it lies on the curve; see [`Point::is_on_curve`].
#[derive(Clone)]
pub struct Point {
    curve: Arc<Curve>,
    x: FieldElement,
    y: FieldElement,
    table: PrecomputeSlot,
}

impl Point {
    pub(crate) fn from_parts(
        curve: Arc<Curve>,
        x: FieldElement,
        y: FieldElement,
        table: PrecomputeSlot,
    ) -> Self {
        Self { curve, x, y, table }
    }

    fn with_coordinates(&self, x: FieldElement, y: FieldElement) -> Self {
        Self::from_parts(self.curve.clone(), x, y, PrecomputeSlot::default())
    }

    /// Same coordinates with a private, empty precompute slot
    pub(crate) fn detached(&self) -> Self {
        self.with_coordinates(self.x.clone(), self.y.clone())
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn is_on_curve(&self) -> bool {
        self.curve.contains(self)
    }

    /// Group addition
    pub fn add(&self, other: &Point) -> Point {
        if self.is_identity() {
            return other.detached();
        }
        if other.is_identity() {
            return self.detached();
        }

        let field = self.curve.field();
        let a = self.curve.a();

        let (lambda, x3) = if self.x != other.x {
            // chord
            let num = self.y.add(&other.y);
            let den = self.x.add(&other.x);
            let lambda = field.mul(&num, &field.invert(&den));

            let mut x3 = field.square(&lambda);
            x3.add_assign(a);
            x3.add_assign(&lambda);
            x3.add_assign(&self.x);
            x3.add_assign(&other.x);
            (lambda, x3)
        } else if self.y != other.y || self.x.is_zero() {
            // P + (-P), or doubling a point of order two
            return self.curve.identity();
        } else {
            // tangent
            let mut lambda = field.mul(&self.y, &field.invert(&self.x));
            lambda.add_assign(&self.x);

            let mut x3 = field.square(&lambda);
            x3.add_assign(a);
            x3.add_assign(&lambda);
            (lambda, x3)
        };

        let mut y3 = field.mul(&lambda, &self.x.add(&x3));
        y3.add_assign(&x3);
        y3.add_assign(&self.y);

        self.with_coordinates(x3, y3)
    }

    pub fn twice(&self) -> Point {
        self.add(self)
    }

    /// `2 * self + other`
    pub fn twice_plus(&self, other: &Point) -> Point {
        self.twice().add(other)
    }

    /// `2^e * self`
    pub fn times_pow2(&self, e: usize) -> Point {
        let mut r = self.detached();
        for _ in 0..e {
            if r.is_identity() {
                break;
            }
            r = r.twice();
        }
        r
    }

    /// `-(x, y) = (x, x + y)`
    pub fn negate(&self) -> Point {
        self.with_coordinates(self.x.clone(), self.x.add(&self.y))
    }

    /// Scalar multiplication `k * self` via wNAF
    pub fn mul(&self, k: &Scalar) -> Point {
        if k.is_zero() || self.is_identity() {
            return self.curve.identity();
        }
        wnaf::mul_positive(self, k)
    }

    /// Multiplication by a small signed integer
    pub fn mul_i64(&self, k: i64) -> Point {
        let r = self.mul(&Scalar::from_u64(k.unsigned_abs()));
        if k < 0 {
            r.negate()
        } else {
            r
        }
    }

    /// DSTU compressed form: `x` with bit 0 replaced by `Tr(y / x)`
    ///
    /// The identity compresses to zero.
    pub fn compress(&self) -> FieldElement {
        if self.x.is_zero() {
            return self.curve.field().zero();
        }
        let field = self.curve.field();
        let ratio = field.mul(&self.y, &field.invert(&self.x));

        let mut c = field.reduce(&self.x);
        if field.trace(&ratio) == 1 {
            c.set_bit(0);
        } else {
            c.clear_bit(0);
        }
        c
    }

    /// Table of odd multiples good for at least `width`, built on first use
    pub(crate) fn precomputed(&self, width: usize) -> Arc<PrecomputedTable> {
        if let Some(table) = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            if table.width() >= width {
                return table.clone();
            }
        }

        let built = Arc::new(PrecomputedTable::build(self, width));

        let mut slot = self.table.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(existing) if existing.width() >= width => existing.clone(),
            _ => {
                *slot = Some(built.clone());
                built
            }
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("Point(identity)");
        }
        write!(f, "Point(x: 0x{}, y: 0x{})", self.x.to_hex(), self.y.to_hex())
    }
}
