//! Arithmetic in binary extension fields GF(2^m)
//!
//! Elements are polynomials over GF(2) in polynomial basis, reduced by a
//! sparse irreducible trinomial `t^m + t^k + 1` or pentanomial
//! `t^m + t^k1 + t^k2 + t^k3 + 1`. Addition is XOR; multiplication is a
//! carry-less product built from 1x1 / 2x2 word kernels followed by sparse
//! reduction; inversion is the binary extended Euclidean algorithm.
//!
//! `FieldElement` carries no reference to its field, so every operation
//! that depends on the modulus is a method of [`BinaryField`].

mod element;
mod mul;


pub use element::FieldElement;
pub use mul::WORD_BITS;

use crate::error::{validate, Error, Result};

/// Tagged external representation of a field element or scalar
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    /// Big-endian hex digits
    Hex(String),
    BigEndianBytes(Vec<u8>),
    LittleEndianBytes(Vec<u8>),
    /// 32-bit limbs, least significant first
    LittleEndianWords(Vec<u32>),
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        FieldInput::Hex(s.to_string())
    }
}

/// The field GF(2^m) defined by its reduction polynomial
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryField {
    m: usize,
    /// `[m, k1, (k2, k3,) 0]`
    exponents: Vec<usize>,
    words: usize,
}

impl BinaryField {
    /// Create GF(2^m) reduced by `t^m + sum(t^k for k in ks) + 1`
    ///
    /// `ks` holds one (trinomial) or three (pentanomial) exponents in
    /// strictly descending order, each in `1..m`. Irreducibility is not
    /// checked here; curve construction catches a bad polynomial through
    /// the base point order check.
    pub fn new(m: usize, ks: &[usize]) -> Result<Self> {
        validate::parameter(m >= 2, "m", "field degree must be at least 2")?;
        validate::parameter(
            ks.len() == 1 || ks.len() == 3,
            "ks",
            "reduction polynomial must be a trinomial or pentanomial",
        )?;
        validate::parameter(
            ks.windows(2).all(|w| w[0] > w[1]),
            "ks",
            "exponents must be strictly descending",
        )?;
        validate::parameter(
            ks.iter().all(|&k| k > 0 && k < m),
            "ks",
            "exponents must lie strictly between 0 and m",
        )?;

        let mut exponents = Vec::with_capacity(ks.len() + 2);
        exponents.push(m);
        exponents.extend_from_slice(ks);
        exponents.push(0);

        Ok(Self {
            m,
            exponents,
            words: (m + WORD_BITS - 1) / WORD_BITS,
        })
    }

    /// Extension degree `m`
    pub fn degree(&self) -> usize {
        self.m
    }

    pub fn exponents(&self) -> &[usize] {
        &self.exponents
    }

    /// Limbs of a reduced element
    pub fn words(&self) -> usize {
        self.words
    }

    /// Bytes of a reduced element (`ceil(m / 8)`)
    pub fn byte_len(&self) -> usize {
        (self.m + 7) / 8
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement::from_words(vec![0; self.words])
    }

    pub fn one(&self) -> FieldElement {
        let mut one = self.zero();
        one.set_bit(0);
        one
    }

    /// The reduction polynomial itself (degree `m`, so not a field element)
    pub fn modulus(&self) -> FieldElement {
        let mut f = FieldElement::from_words(vec![0; self.m / WORD_BITS + 1]);
        for &e in &self.exponents {
            f.set_bit(e);
        }
        f
    }

    /// Build an element from any supported representation
    ///
    /// The value is zero-padded or truncated to the field's limb count but
    /// not reduced; use [`BinaryField::is_reduced`] where range matters.
    pub fn element(&self, input: &FieldInput) -> Result<FieldElement> {
        match input {
            FieldInput::Hex(s) => self.from_hex(s),
            FieldInput::BigEndianBytes(b) => Ok(self.from_be_bytes(b)),
            FieldInput::LittleEndianBytes(b) => Ok(self.from_le_bytes(b)),
            FieldInput::LittleEndianWords(w) => Ok(self.from_le_words(w)),
        }
    }

    pub fn from_hex(&self, s: &str) -> Result<FieldElement> {
        FieldElement::from_hex(s).map(|e| self.fit(e))
    }

    pub fn from_be_bytes(&self, bytes: &[u8]) -> FieldElement {
        self.fit(FieldElement::from_be_bytes(bytes))
    }

    pub fn from_le_bytes(&self, bytes: &[u8]) -> FieldElement {
        self.fit(FieldElement::from_le_bytes(bytes))
    }

    pub fn from_le_words(&self, words: &[u32]) -> FieldElement {
        self.fit(FieldElement::from_words(words.to_vec()))
    }

    fn fit(&self, mut e: FieldElement) -> FieldElement {
        e.resize(self.words);
        e
    }

    /// True when no bit at or above `m` is set
    pub fn is_reduced(&self, a: &FieldElement) -> bool {
        a.bit_length() <= self.m
    }

    /// Parse big-endian bytes that must encode a reduced element
    pub fn checked_from_be_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        validate::max_length("field element", bytes.len(), self.byte_len())?;
        let e = self.from_be_bytes(bytes);
        if !self.is_reduced(&e) {
            return Err(Error::parse("field element", "value has bits at or above m"));
        }
        Ok(e)
    }

    /// Reduce an arbitrary-length polynomial modulo the field polynomial
    pub fn reduce(&self, a: &FieldElement) -> FieldElement {
        let mut z = a.words().to_vec();
        mul::reduce(&mut z, &self.exponents, self.words);
        FieldElement::from_words(z)
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut r = a.add(b);
        r.resize(self.words.max(r.words().len()));
        r
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut z = mul::poly_mul(a.words(), b.words());
        mul::reduce(&mut z, &self.exponents, self.words);
        FieldElement::from_words(z)
    }

    pub fn square(&self, a: &FieldElement) -> FieldElement {
        let mut z = mul::poly_square(a.words());
        mul::reduce(&mut z, &self.exponents, self.words);
        FieldElement::from_words(z)
    }

    /// Multiplicative inverse; `invert(0)` is defined as 0
    ///
    /// Callers must not rely on the zero case for anything but avoiding a
    /// panic; use [`BinaryField::checked_invert`] when zero is possible.
    pub fn invert(&self, a: &FieldElement) -> FieldElement {
        self.invert_inner(a).unwrap_or_else(|| self.zero())
    }

    pub fn checked_invert(&self, a: &FieldElement) -> Result<FieldElement> {
        self.invert_inner(a).ok_or(Error::Arithmetic {
            operation: "invert",
            details: "zero has no inverse",
        })
    }

    fn invert_inner(&self, a: &FieldElement) -> Option<FieldElement> {
        let width = self.m / WORD_BITS + 1;
        let modulus = self.modulus();

        let mut u = self.reduce(a);
        u.resize(width);
        if u.is_zero() {
            return None;
        }
        let mut v = modulus.clone();
        let mut b = FieldElement::from_words(vec![0; width]);
        b.set_bit(0);
        let mut c = FieldElement::from_words(vec![0; width]);

        // invariants: b*a == u, c*a == v (mod f)
        loop {
            while !u.test_bit(0) {
                if u.is_zero() {
                    return None;
                }
                u.shift_right_assign(1);
                if b.test_bit(0) {
                    b.add_assign(&modulus);
                }
                b.shift_right_assign(1);
            }
            if u.is_one() {
                break;
            }
            if u.bit_length() < v.bit_length() {
                std::mem::swap(&mut u, &mut v);
                std::mem::swap(&mut b, &mut c);
            }
            u.add_assign(&v);
            b.add_assign(&c);
        }

        b.resize(self.words);
        Some(b)
    }

    /// Absolute trace `Tr(a) = a + a^2 + .. + a^(2^(m-1))`, either 0 or 1
    pub fn trace(&self, a: &FieldElement) -> u8 {
        let a = self.reduce(a);
        let mut rv = a.clone();
        for _ in 1..self.m {
            rv = self.square(&rv);
            rv.add_assign(&a);
        }
        rv.test_bit(0) as u8
    }

    /// Find `z` with `z^2 + z == a` using the half-trace
    ///
    /// Only odd extension degrees are supported. The other root is `z + 1`.
    pub fn solve_quadratic(&self, a: &FieldElement) -> Result<FieldElement> {
        if self.m % 2 == 0 {
            return Err(Error::UnsupportedCurve {
                context: "solve_quadratic",
                details: "half-trace needs an odd field degree".into(),
            });
        }

        let a = self.reduce(a);
        let mut z = a.clone();
        for _ in 0..(self.m - 1) / 2 {
            z = self.square(&self.square(&z));
            z.add_assign(&a);
        }

        let mut check = self.square(&z);
        check.add_assign(&z);
        if check != a {
            return Err(Error::Arithmetic {
                operation: "solve_quadratic",
                details: "no root",
            });
        }
        Ok(z)
    }
}
