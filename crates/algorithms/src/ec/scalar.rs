//! Non-negative integers for private keys, nonces and signature components
//!
//! Only the handful of operations the DSTU 4145 protocol needs are provided.
//! Values are little-endian 32-bit limbs and are wiped on drop, since most
//! of them are secret.

use core::cmp::Ordering;
use std::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::gf2m::{FieldElement, FieldInput, WORD_BITS};

/// Arbitrary-size unsigned integer
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    words: Vec<u32>,
}

impl Scalar {
    pub fn zero() -> Self {
        Self { words: Vec::new() }
    }

    pub fn from_words(mut words: Vec<u32>) -> Self {
        trim(&mut words);
        Self { words }
    }

    pub fn from_u64(v: u64) -> Self {
        Self::from_words(vec![v as u32, (v >> 32) as u32])
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; (bytes.len() + 3) / 4];
        for (i, &b) in bytes.iter().rev().enumerate() {
            words[i / 4] |= (b as u32) << (8 * (i % 4));
        }
        Self::from_words(words)
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; (bytes.len() + 3) / 4];
        for (i, &b) in bytes.iter().enumerate() {
            words[i / 4] |= (b as u32) << (8 * (i % 4));
        }
        Self::from_words(words)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        FieldElement::from_hex(s)
            .map(|e| Self::from(&e))
            .map_err(|_| Error::parse("scalar hex", format!("invalid hex digits in {:?}", s)))
    }

    /// Parse any tagged representation without truncation
    pub fn from_input(input: &FieldInput) -> Result<Self> {
        match input {
            FieldInput::Hex(s) => Self::from_hex(s),
            FieldInput::BigEndianBytes(b) => Ok(Self::from_be_bytes(b)),
            FieldInput::LittleEndianBytes(b) => Ok(Self::from_le_bytes(b)),
            FieldInput::LittleEndianWords(w) => Ok(Self::from_words(w.clone())),
        }
    }

    /// Little-endian limbs without high zero words
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Exactly `len` bytes, big-endian; higher bytes are dropped
    pub fn to_be_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = self.to_le_bytes(len);
        out.reverse();
        out
    }

    /// Exactly `len` bytes, little-endian; higher bytes are dropped
    pub fn to_le_bytes(&self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| {
                self.words
                    .get(i / 4)
                    .map_or(0, |w| (w >> (8 * (i % 4))) as u8)
            })
            .collect()
    }

    pub fn to_hex(&self) -> String {
        self.to_field().to_hex()
    }

    /// Reinterpret as a field element (same limbs)
    pub fn to_field(&self) -> FieldElement {
        FieldElement::from_words(self.words.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    pub fn bit_length(&self) -> usize {
        match self.words.last() {
            Some(&top) => {
                (self.words.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
            }
            None => 0,
        }
    }

    /// Byte length of the minimal big-endian encoding
    pub fn byte_len(&self) -> usize {
        (self.bit_length() + 7) / 8
    }

    pub fn test_bit(&self, i: usize) -> bool {
        self.words
            .get(i / WORD_BITS)
            .map_or(false, |w| (w >> (i % WORD_BITS)) & 1 == 1)
    }

    /// Lowest 32 bits
    pub fn low_u32(&self) -> u32 {
        self.words.first().copied().unwrap_or(0)
    }

    /// Keep only the lowest `bits` bits
    pub fn truncate_bits(&mut self, bits: usize) {
        let keep = (bits + WORD_BITS - 1) / WORD_BITS;
        self.words.truncate(keep);
        if bits % WORD_BITS != 0 {
            if let Some(top) = self.words.get_mut(keep - 1) {
                *top &= (1u32 << (bits % WORD_BITS)) - 1;
            }
        }
        trim(&mut self.words);
    }

    pub fn shr(&self, bits: usize) -> Scalar {
        let mut out = self.clone();
        out.shr_assign(bits);
        out
    }

    pub fn shr_assign(&mut self, bits: usize) {
        let ws = bits / WORD_BITS;
        let bs = bits % WORD_BITS;
        if ws >= self.words.len() {
            self.words.clear();
            return;
        }
        let len = self.words.len() - ws;
        for i in 0..len {
            let lo = self.words[i + ws];
            self.words[i] = if bs == 0 {
                lo
            } else {
                let hi = self.words.get(i + ws + 1).copied().unwrap_or(0);
                (lo >> bs) | (hi << (WORD_BITS - bs))
            };
        }
        self.words.truncate(len);
        trim(&mut self.words);
    }

    pub fn shl(&self, bits: usize) -> Scalar {
        if self.is_zero() {
            return Scalar::zero();
        }
        let ws = bits / WORD_BITS;
        let bs = bits % WORD_BITS;
        let mut words = vec![0u32; self.words.len() + ws + 1];
        for (i, &w) in self.words.iter().enumerate() {
            words[i + ws] |= w << bs;
            if bs != 0 {
                words[i + ws + 1] |= w >> (WORD_BITS - bs);
            }
        }
        Scalar::from_words(words)
    }

    pub fn xor(&self, other: &Scalar) -> Scalar {
        let mut words = vec![0u32; self.words.len().max(other.words.len())];
        for (i, w) in words.iter_mut().enumerate() {
            *w = self.words.get(i).copied().unwrap_or(0) ^ other.words.get(i).copied().unwrap_or(0);
        }
        Scalar::from_words(words)
    }

    pub fn add(&self, other: &Scalar) -> Scalar {
        let len = self.words.len().max(other.words.len());
        let mut words = Vec::with_capacity(len + 1);
        let mut carry = 0u64;
        for i in 0..len {
            let sum = self.words.get(i).copied().unwrap_or(0) as u64
                + other.words.get(i).copied().unwrap_or(0) as u64
                + carry;
            words.push(sum as u32);
            carry = sum >> 32;
        }
        words.push(carry as u32);
        Scalar::from_words(words)
    }

    /// `self - other`, or `None` when the result would be negative
    pub fn checked_sub(&self, other: &Scalar) -> Option<Scalar> {
        if *self < *other {
            return None;
        }
        let mut words = Vec::with_capacity(self.words.len());
        let mut borrow = 0i64;
        for (i, &w) in self.words.iter().enumerate() {
            let mut diff = w as i64 - other.words.get(i).copied().unwrap_or(0) as i64 - borrow;
            if diff < 0 {
                diff += 1 << 32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            words.push(diff as u32);
        }
        Some(Scalar::from_words(words))
    }

    pub fn mul(&self, other: &Scalar) -> Scalar {
        if self.is_zero() || other.is_zero() {
            return Scalar::zero();
        }
        let mut words = vec![0u32; self.words.len() + other.words.len()];
        for (i, &a) in self.words.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.words.iter().enumerate() {
                let t = a as u64 * b as u64 + words[i + j] as u64 + carry;
                words[i + j] = t as u32;
                carry = t >> 32;
            }
            words[i + other.words.len()] = carry as u32;
        }
        Scalar::from_words(words)
    }

    pub fn mul_small(&self, k: u32) -> Scalar {
        self.mul(&Scalar::from_u64(k as u64))
    }

    /// Remainder modulo `n` by shift-and-subtract; `n` must be non-zero
    pub fn rem(&self, n: &Scalar) -> Scalar {
        if n.is_zero() {
            return self.clone();
        }
        let nb = n.bit_length();
        let mut r = self.clone();
        while r >= *n {
            let shift = r.bit_length() - nb;
            let mut t = n.shl(shift);
            if t > r {
                t = n.shl(shift - 1);
            }
            r = match r.checked_sub(&t) {
                Some(v) => v,
                None => break,
            };
        }
        r
    }

    /// `(self * k + c) mod n`
    pub fn mul_add_mod(&self, k: &Scalar, c: &Scalar, n: &Scalar) -> Scalar {
        self.mul(k).add(c).rem(n)
    }
}

fn trim(words: &mut Vec<u32>) {
    while words.last() == Some(&0) {
        words.pop();
    }
}

impl From<&FieldElement> for Scalar {
    fn from(e: &FieldElement) -> Self {
        Scalar::from_words(e.trimmed().to_vec())
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Scalar {}

impl ConstantTimeEq for Scalar {
    /// Compares limbs up to the longer operand; only the lengths leak
    fn ct_eq(&self, other: &Self) -> Choice {
        let len = self.words.len().max(other.words.len());
        let mut eq = Choice::from(1u8);
        for i in 0..len {
            let a = self.words.get(i).copied().unwrap_or(0);
            let b = other.words.get(i).copied().unwrap_or(0);
            eq &= a.ct_eq(&b);
        }
        eq
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words
            .len()
            .cmp(&other.words.len())
            .then_with(|| self.words.iter().rev().cmp(other.words.iter().rev()))
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(hex: &str) -> Scalar {
        Scalar::from_hex(hex).unwrap()
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(bool::from(s("1234567890abcdef").ct_eq(&s("1234567890abcdef"))));
        assert!(!bool::from(s("1234567890abcdef").ct_eq(&s("1234567890abcdee"))));
        assert!(!bool::from(s("1").ct_eq(&s("100000001"))));
        assert!(bool::from(Scalar::zero().ct_eq(&Scalar::from_u64(0))));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(s("ffffffff").add(&s("1")), s("100000000"));
        assert_eq!(s("100000000").checked_sub(&s("1")), Some(s("ffffffff")));
        assert_eq!(s("1").checked_sub(&s("2")), None);
        assert_eq!(
            s("ffffffffffffffff").mul(&s("ffffffffffffffff")),
            s("fffffffffffffffe0000000000000001")
        );
        assert_eq!(s("1234").mul_small(3), s("369c"));
        assert_eq!(Scalar::from_u64(1_000_003).rem(&Scalar::from_u64(97)), Scalar::from_u64(1_000_003 % 97));
    }

    #[test]
    fn test_rem_large_modulus() {
        let n = s("800000000000000000000000000000006759213AF182E987D3E17714907D470D");
        let big = n.mul(&n).add(&s("5"));
        assert_eq!(big.rem(&n), s("5"));
        assert_eq!(n.rem(&n), Scalar::zero());
    }

    #[test]
    fn test_shifts_and_bits() {
        let v = s("80000000000000001");
        assert_eq!(v.bit_length(), 68);
        assert!(v.test_bit(67));
        assert!(v.test_bit(0));
        assert_eq!(v.shr(64), s("8"));
        assert_eq!(v.shr(100), Scalar::zero());
        assert_eq!(s("1").shl(67).add(&s("1")), v);
        assert_eq!(s("f0").xor(&s("ff")), s("f"));
    }

    #[test]
    fn test_truncate_bits() {
        let mut v = s("1ffffffffff");
        v.truncate_bits(36);
        assert_eq!(v, s("fffffffff"));
        v.truncate_bits(32);
        assert_eq!(v, s("ffffffff"));
    }

    #[test]
    fn test_ordering() {
        assert!(s("100000000") > s("ffffffff"));
        assert!(s("0") < s("1"));
        assert_eq!(s("000000ff"), s("ff"));
    }

    #[test]
    fn test_byte_forms() {
        let v = s("0102");
        assert_eq!(v.to_be_bytes(4), vec![0, 0, 1, 2]);
        assert_eq!(v.to_le_bytes(4), vec![2, 1, 0, 0]);
        assert_eq!(Scalar::from_be_bytes(&[0, 0, 1, 2]), v);
        assert_eq!(Scalar::from_le_bytes(&[2, 1]), v);
        assert_eq!(v.byte_len(), 2);
    }
}
