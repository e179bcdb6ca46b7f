//! Polynomial-basis field element storage

use std::fmt;
use std::hash::{Hash, Hasher};

use zeroize::Zeroize;

use super::mul::WORD_BITS;
use crate::error::{Error, Result};

/// Element of a binary field as a little-endian vector of 32-bit words
///
/// The element does not know its field. Values produced by `BinaryField`
/// operations have the field's word count; parsed or shifted values may be
/// longer or shorter. Equality and hashing ignore high zero words.
#[derive(Clone, Default, Zeroize)]
pub struct FieldElement {
    words: Vec<u32>,
}

impl FieldElement {
    /// Wrap little-endian words
    pub fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Zero with no limbs
    pub fn zero() -> Self {
        Self { words: Vec::new() }
    }

    pub fn one() -> Self {
        Self { words: vec![1] }
    }

    /// Parse big-endian hex; odd lengths are accepted
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = if s.len() % 2 == 1 {
            hex::decode(format!("0{}", s))
        } else {
            hex::decode(s)
        }
        .map_err(|e| Error::parse("field element hex", e.to_string()))?;
        Ok(Self::from_be_bytes(&bytes))
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; (bytes.len() + 3) / 4];
        for (i, &b) in bytes.iter().rev().enumerate() {
            words[i / 4] |= (b as u32) << (8 * (i % 4));
        }
        Self { words }
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; (bytes.len() + 3) / 4];
        for (i, &b) in bytes.iter().enumerate() {
            words[i / 4] |= (b as u32) << (8 * (i % 4));
        }
        Self { words }
    }

    /// Little-endian limbs, including any high zero words
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Limbs without high zero words
    pub fn trimmed(&self) -> &[u32] {
        let len = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1);
        &self.words[..len]
    }

    pub(crate) fn resize(&mut self, len: usize) {
        self.words.truncate(len);
        self.words.resize(len, 0);
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn is_one(&self) -> bool {
        self.trimmed() == [1]
    }

    /// Position of the highest set bit plus one; 0 for zero
    pub fn bit_length(&self) -> usize {
        let t = self.trimmed();
        match t.last() {
            Some(&top) => (t.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize),
            None => 0,
        }
    }

    pub fn test_bit(&self, i: usize) -> bool {
        self.words
            .get(i / WORD_BITS)
            .map_or(false, |w| (w >> (i % WORD_BITS)) & 1 == 1)
    }

    /// Set bit `i`, growing the limb vector when needed
    pub fn set_bit(&mut self, i: usize) {
        let w = i / WORD_BITS;
        if w >= self.words.len() {
            self.words.resize(w + 1, 0);
        }
        self.words[w] |= 1 << (i % WORD_BITS);
    }

    pub fn clear_bit(&mut self, i: usize) {
        if let Some(w) = self.words.get_mut(i / WORD_BITS) {
            *w &= !(1 << (i % WORD_BITS));
        }
    }

    /// Field addition (XOR), widening to the longer operand
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut out = self.clone();
        out.add_assign(other);
        out
    }

    pub fn add_assign(&mut self, other: &FieldElement) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (w, o) in self.words.iter_mut().zip(other.words.iter()) {
            *w ^= o;
        }
    }

    pub fn shift_right(&self, bits: usize) -> FieldElement {
        let mut out = self.clone();
        out.shift_right_assign(bits);
        out
    }

    /// Shift towards t^0 in place; the limb count is preserved
    pub fn shift_right_assign(&mut self, bits: usize) {
        let len = self.words.len();
        let ws = bits / WORD_BITS;
        let bs = bits % WORD_BITS;
        for i in 0..len {
            let lo = self.words.get(i + ws).copied().unwrap_or(0);
            self.words[i] = if bs == 0 {
                lo
            } else {
                let hi = self.words.get(i + ws + 1).copied().unwrap_or(0);
                (lo >> bs) | (hi << (WORD_BITS - bs))
            };
        }
    }

    /// Low `len` bytes, big-endian
    pub fn to_be_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = self.to_le_bytes(len);
        out.reverse();
        out
    }

    /// Low `len` bytes, little-endian
    pub fn to_le_bytes(&self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| {
                self.words
                    .get(i / 4)
                    .map_or(0, |w| (w >> (8 * (i % 4))) as u8)
            })
            .collect()
    }

    /// Lowercase hex without leading zeros; `"0"` for zero
    pub fn to_hex(&self) -> String {
        let bytes = self.to_be_bytes(self.trimmed().len() * 4);
        let encoded = hex::encode(bytes);
        let digits = encoded.trim_start_matches('0');
        if digits.is_empty() {
            "0".to_string()
        } else {
            digits.to_string()
        }
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", self.to_hex())
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u32> for FieldElement {
    fn from(w: u32) -> Self {
        Self { words: vec![w] }
    }
}
