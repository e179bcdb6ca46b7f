//! Curve parameters, point construction and decompression

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use dstu4145_params::NamedCurve;

use super::point::{Point, PrecomputeSlot};
use super::scalar::Scalar;
use crate::error::{validate, Error, Result};
use crate::gf2m::{BinaryField, FieldElement, FieldInput};

/// Base point of a curve definition
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BasePoint {
    /// DSTU compressed x-coordinate, big-endian hex
    Compressed(String),
    /// Affine coordinates, big-endian hex
    Affine { x: String, y: String },
}

/// Textual curve definition, as found in tables or configuration files
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Field degree
    pub m: usize,
    /// Middle exponents of the reduction polynomial, descending
    pub ks: Vec<usize>,
    pub a: String,
    pub b: String,
    pub order: String,
    pub cofactor: u32,
    pub base: BasePoint,
}

impl From<&NamedCurve> for CurveSpec {
    fn from(c: &NamedCurve) -> Self {
        Self {
            name: Some(c.name.to_string()),
            m: c.m,
            ks: c.ks.to_vec(),
            a: c.a.to_string(),
            b: c.b.to_string(),
            order: c.order.to_string(),
            cofactor: c.cofactor,
            base: BasePoint::Compressed(c.base.to_string()),
        }
    }
}

/// Elliptic curve `y^2 + xy = x^3 + a*x^2 + b` over GF(2^m)
///
/// Shared as `Arc<Curve>`. Holds two caches that only ever grow: affine
/// coordinates of decompressed points and the base point's wNAF table.
pub struct Curve {
    name: Option<String>,
    field: BinaryField,
    a: FieldElement,
    b: FieldElement,
    order: Scalar,
    cofactor: u32,
    base_x: FieldElement,
    base_y: FieldElement,
    base_table: PrecomputeSlot,
    expand_cache: RwLock<HashMap<Vec<u8>, (FieldElement, FieldElement)>>,
}

impl Curve {
    /// Build and validate a curve
    ///
    /// Fails unless the degree is odd, `b != 0`, the base point lies on the
    /// curve and `order * G` is the identity.
    pub fn new(spec: &CurveSpec) -> Result<Arc<Curve>> {
        let field = BinaryField::new(spec.m, &spec.ks)?;
        if field.degree() % 2 == 0 {
            return Err(Error::UnsupportedCurve {
                context: "Curve::new",
                details: format!("even field degree {}", field.degree()).into(),
            });
        }

        let a = parse_reduced(&field, &spec.a, "a")?;
        let b = parse_reduced(&field, &spec.b, "b")?;
        validate::parameter(!b.is_zero(), "b", "coefficient b must be non-zero")?;

        let order = Scalar::from_hex(&spec.order)?;
        validate::parameter(order.bit_length() > 1, "order", "order must exceed 1")?;
        validate::parameter(spec.cofactor > 0, "cofactor", "cofactor must be positive")?;

        let (base_x, base_y) = match &spec.base {
            BasePoint::Compressed(c) => {
                let c = parse_reduced(&field, c, "base")?;
                expand_coordinates(&field, &a, &b, &c)?
            }
            BasePoint::Affine { x, y } => (
                parse_reduced(&field, x, "base.x")?,
                parse_reduced(&field, y, "base.y")?,
            ),
        };

        let curve = Arc::new(Curve {
            name: spec.name.clone(),
            field,
            a,
            b,
            order,
            cofactor: spec.cofactor,
            base_x,
            base_y,
            base_table: PrecomputeSlot::default(),
            expand_cache: RwLock::new(HashMap::new()),
        });

        let g = curve.base();
        validate::parameter(curve.contains(&g), "base", "base point is not on the curve")?;
        validate::parameter(
            g.mul(&curve.order).is_identity(),
            "order",
            "base point order does not match",
        )?;

        log::debug!(
            "constructed curve {} over GF(2^{})",
            curve.name().unwrap_or("<unnamed>"),
            curve.degree()
        );
        Ok(curve)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    pub fn degree(&self) -> usize {
        self.field.degree()
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Order `n` of the base point
    pub fn order(&self) -> &Scalar {
        &self.order
    }

    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Bytes of a fixed-length scalar modulo `n`
    pub fn order_byte_len(&self) -> usize {
        self.order.byte_len()
    }

    /// Base point `G`; clones share its precomputed table
    pub fn base(self: &Arc<Self>) -> Point {
        Point::from_parts(
            self.clone(),
            self.base_x.clone(),
            self.base_y.clone(),
            self.base_table.clone(),
        )
    }

    pub fn identity(self: &Arc<Self>) -> Point {
        self.point(self.field.zero(), self.field.zero())
    }

    /// Point from coordinates, without an on-curve check
    pub fn point(self: &Arc<Self>, x: FieldElement, y: FieldElement) -> Point {
        Point::from_parts(self.clone(), x, y, PrecomputeSlot::default())
    }

    /// Point from encoded coordinates, without an on-curve check
    pub fn point_from(self: &Arc<Self>, x: &FieldInput, y: &FieldInput) -> Result<Point> {
        Ok(self.point(self.field.element(x)?, self.field.element(y)?))
    }

    /// True when `p` has reduced coordinates satisfying the curve equation
    pub fn contains(&self, p: &Point) -> bool {
        let f = &self.field;
        let (x, y) = (p.x(), p.y());
        if !f.is_reduced(x) || !f.is_reduced(y) {
            return false;
        }

        let x2 = f.square(x);
        let mut lhs = f.square(y);
        lhs.add_assign(&f.mul(x, y));

        let mut rhs = f.mul(&x2, x);
        rhs.add_assign(&f.mul(&self.a, &x2));
        rhs.add_assign(&self.b);

        lhs == rhs
    }

    /// Recover a point from its DSTU compressed form
    ///
    /// Zero decompresses to the identity. Results are cached per curve.
    pub fn expand(self: &Arc<Self>, compressed: &FieldElement) -> Result<Point> {
        if compressed.is_zero() {
            return Ok(self.identity());
        }
        if !self.field.is_reduced(compressed) {
            return Err(Error::parse("compressed point", "value has bits at or above m"));
        }

        let key = compressed.to_be_bytes(self.field.byte_len());
        if let Some((x, y)) = self
            .expand_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(self.point(x.clone(), y.clone()));
        }

        let (x, y) = expand_coordinates(&self.field, &self.a, &self.b, compressed)?;
        let mut cache = self
            .expand_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let (x, y) = cache.entry(key).or_insert((x, y)).clone();
        Ok(self.point(x, y))
    }

    /// Reduce a field product to a signature component: keep the low
    /// `bitlen(n) - 1` bits
    pub fn truncate(&self, v: &FieldElement) -> Scalar {
        let mut r = Scalar::from(v);
        r.truncate_bits(self.order.bit_length() - 1);
        r
    }
}

fn parse_reduced(field: &BinaryField, hex: &str, name: &'static str) -> Result<FieldElement> {
    let e = FieldElement::from_hex(hex)?;
    if !field.is_reduced(&e) {
        return Err(Error::param(name, "value exceeds the field degree"));
    }
    Ok(field.reduce(&e))
}

/// Affine coordinates of the point whose compressed form is `c`
fn expand_coordinates(
    field: &BinaryField,
    a: &FieldElement,
    b: &FieldElement,
    c: &FieldElement,
) -> Result<(FieldElement, FieldElement)> {
    let mut x = field.reduce(c);
    let k = x.test_bit(0);
    x.clear_bit(0);

    // points on the curve have Tr(x) == Tr(a)
    if field.trace(&x) != field.trace(a) {
        x.set_bit(0);
    }

    let x2 = field.square(&x);
    let mut w = field.mul(&x2, &x);
    w.add_assign(&field.mul(a, &x2));
    w.add_assign(b);
    let w = field.mul(&w, &field.checked_invert(&x2)?);

    let mut z = field.solve_quadratic(&w)?;
    if (field.trace(&z) == 1) != k {
        if z.test_bit(0) {
            z.clear_bit(0);
        } else {
            z.set_bit(0);
        }
    }

    let y = field.mul(&z, &x);
    Ok((x, y))
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("m", &self.field.degree())
            .field("a", &self.a)
            .field("b", &self.b)
            .field("order", &self.order)
            .field("cofactor", &self.cofactor)
            .finish()
    }
}
