//! Width-w non-adjacent form recoding and left-to-right multiplication
//!
//! Recodings are lists of packed `i32` entries: the signed odd digit in the
//! high 16 bits and the number of zero positions below it in the low 16
//! bits. Entries are least significant first.

use std::sync::Arc;

use super::point::Point;
use super::scalar::Scalar;
use crate::gf2m::FieldElement;

/// Bit lengths at which the next larger window pays off
pub const WINDOW_SIZE_CUTOFFS: [usize; 6] = [13, 41, 121, 337, 897, 2305];

/// Largest supported window width
pub const MAX_WIDTH: usize = 16;

/// Window width for a scalar of `bits` bits, in `2..=8`
pub fn window_size(bits: usize) -> usize {
    let mut w = 0;
    while w < WINDOW_SIZE_CUTOFFS.len() && bits >= WINDOW_SIZE_CUTOFFS[w] {
        w += 1;
    }
    w + 2
}

#[inline]
fn pack(digit: i32, zeroes: usize) -> i32 {
    debug_assert!(zeroes <= 0xFFFF);
    (digit << 16) | zeroes as i32
}

#[inline]
fn unpack(entry: i32) -> (i32, usize) {
    (entry >> 16, (entry & 0xFFFF) as usize)
}

/// Width-2 NAF using `3k XOR k` to find the non-zero digits
pub fn compact_naf(k: &Scalar) -> Vec<i32> {
    if k.is_zero() {
        return Vec::new();
    }

    let three_k = k.shl(1).add(k);
    let bits = three_k.bit_length();
    let diff = three_k.xor(k);
    let high_bit = bits - 1;

    let mut naf = Vec::with_capacity(bits >> 1);
    let mut zeroes = 0usize;
    let mut i = 1;
    while i < high_bit {
        if !diff.test_bit(i) {
            zeroes += 1;
            i += 1;
            continue;
        }
        let digit = if k.test_bit(i) { -1 } else { 1 };
        naf.push(pack(digit, zeroes));
        zeroes = 1;
        i += 2;
    }
    naf.push(pack(1, zeroes));
    naf
}

/// Width-`width` NAF of `k`; every digit is odd with `|d| < 2^(width-1)`
pub fn window_naf(width: usize, k: &Scalar) -> Vec<i32> {
    if width == 2 {
        return compact_naf(k);
    }
    if k.is_zero() {
        return Vec::new();
    }

    let pow2 = 1i32 << width;
    let mask = pow2 - 1;
    let sign = pow2 >> 1;

    let mut k = k.clone();
    let mut wnaf = Vec::with_capacity(k.bit_length() / width + 1);
    let mut carry = false;
    let mut pos = 0usize;

    while pos <= k.bit_length() {
        if k.test_bit(pos) == carry {
            pos += 1;
            continue;
        }

        k.shr_assign(pos);

        let mut digit = (k.low_u32() as i32) & mask;
        if carry {
            digit += 1;
        }
        carry = digit & sign != 0;
        if carry {
            digit -= pow2;
        }

        let zeroes = if wnaf.is_empty() { pos } else { pos - 1 };
        wnaf.push(pack(digit, zeroes));
        pos = width;
    }
    wnaf
}

/// Odd multiples `{P, 3P, 5P, ..}` of a point and their negations
///
/// Stored as bare coordinates so a table cached on a curve's base point does
/// not keep the curve alive through its own points.
#[derive(Debug)]
pub struct PrecomputedTable {
    width: usize,
    positive: Vec<(FieldElement, FieldElement)>,
    negative: Vec<(FieldElement, FieldElement)>,
}

impl PrecomputedTable {
    /// Build the `2^(width-2)` odd multiples of `p`
    pub(crate) fn build(p: &Point, width: usize) -> Self {
        let len = 1usize << (width - 2);
        let two_p = p.twice();

        let mut points = Vec::with_capacity(len);
        let mut current = p.detached();
        for i in 0..len {
            if i > 0 {
                current = current.add(&two_p);
            }
            points.push(current.clone());
        }

        let positive: Vec<_> = points.iter().map(|q| (q.x().clone(), q.y().clone())).collect();
        let negative = points
            .iter()
            .map(|q| {
                let n = q.negate();
                (n.x().clone(), n.y().clone())
            })
            .collect();

        log::trace!("precomputed {} odd multiples for width {}", len, width);
        Self {
            width,
            positive,
            negative,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.positive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
    }

    /// `(2 * index + 1) * P`, negated when `negative`
    fn point(&self, p: &Point, index: usize, negative: bool) -> Point {
        let (x, y) = if negative {
            &self.negative[index]
        } else {
            &self.positive[index]
        };
        p.curve().point(x.clone(), y.clone())
    }
}

/// Left-to-right wNAF multiplication for `k > 0`
pub(crate) fn mul_positive(p: &Point, k: &Scalar) -> Point {
    let width = window_size(k.bit_length()).clamp(2, MAX_WIDTH);
    let table: Arc<PrecomputedTable> = p.precomputed(width);
    let wnaf = window_naf(width, k);

    let mut r = p.curve().identity();
    let mut i = wnaf.len();

    // top digit: trade `scale` doublings for one addition when it is small
    if i > 1 {
        i -= 1;
        let (digit, mut zeroes) = unpack(wnaf[i]);
        let n = digit.unsigned_abs() as usize;
        let negative = digit < 0;

        if (n << 2) < (1 << width) {
            let highest = usize::BITS as usize - n.leading_zeros() as usize;
            let scale = width - highest;
            let low_bits = n ^ (1 << (highest - 1));

            let i1 = (1 << (width - 1)) - 1;
            let i2 = (low_bits << scale) + 1;
            r = table
                .point(p, i1 >> 1, negative)
                .add(&table.point(p, i2 >> 1, negative));

            zeroes -= scale;
        } else {
            r = table.point(p, n >> 1, negative);
        }

        r = r.times_pow2(zeroes);
    }

    while i > 0 {
        i -= 1;
        let (digit, zeroes) = unpack(wnaf[i]);
        let n = digit.unsigned_abs() as usize;
        r = r.twice_plus(&table.point(p, n >> 1, digit < 0));
        r = r.times_pow2(zeroes);
    }

    r
}
