//! Signature values and their byte encodings
//!
//! Two layouts are supported:
//!
//! * split: `r` and `s` as separate big-endian strings, each padded to the
//!   byte length of the curve order
//! * short: `0x04 || 2L || r || s` with both halves little-endian and `L`
//!   bytes long, the form carried inside an OCTET STRING

use dstu4145_algorithms::ec::{Curve, Scalar};
use dstu4145_algorithms::error::{to_core_result, validate};
use dstu4145_api::{Error as ApiError, Result as ApiResult};
use dstu4145_params::dstu4145::OCTET_STRING_TAG;

/// DSTU 4145 signature `(r, s)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    pub fn new(r: Scalar, s: Scalar) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &Scalar {
        &self.r
    }

    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// `(r, s)` as big-endian strings at the order byte length
    pub fn to_split(&self, curve: &Curve) -> (Vec<u8>, Vec<u8>) {
        let len = curve.order_byte_len();
        (self.r.to_be_bytes(len), self.s.to_be_bytes(len))
    }

    /// Parse big-endian components no longer than the order byte length
    ///
    /// Range checks against `n` are left to verification.
    pub fn from_split(curve: &Curve, r: &[u8], s: &[u8]) -> ApiResult<Self> {
        let len = curve.order_byte_len();
        to_core_result(validate::max_length("signature r", r.len(), len), "Signature::from_split")?;
        to_core_result(validate::max_length("signature s", s.len(), len), "Signature::from_split")?;
        Ok(Self::new(Scalar::from_be_bytes(r), Scalar::from_be_bytes(s)))
    }

    /// `0x04 || 2L || r_le || s_le`
    pub fn to_short(&self, curve: &Curve) -> Vec<u8> {
        let len = curve.order_byte_len();
        let mut out = Vec::with_capacity(2 + 2 * len);
        out.push(OCTET_STRING_TAG);
        out.push((2 * len) as u8);
        out.extend_from_slice(&self.r.to_le_bytes(len));
        out.extend_from_slice(&self.s.to_le_bytes(len));
        out
    }

    pub fn from_short(curve: &Curve, bytes: &[u8]) -> ApiResult<Self> {
        let ctx = "Signature::from_short";
        let len = curve.order_byte_len();
        to_core_result(validate::length("short signature", bytes.len(), 2 + 2 * len), ctx)?;
        if bytes[0] != OCTET_STRING_TAG {
            return Err(ApiError::Parse {
                context: ctx,
                message: format!("expected tag {:02x}, got {:02x}", OCTET_STRING_TAG, bytes[0]),
            });
        }
        if bytes[1] as usize != 2 * len {
            return Err(ApiError::Parse {
                context: ctx,
                message: format!("length byte {} does not match payload", bytes[1]),
            });
        }

        let (r, s) = bytes[2..].split_at(len);
        Ok(Self::new(Scalar::from_le_bytes(r), Scalar::from_le_bytes(s)))
    }
}
