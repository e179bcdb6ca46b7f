//! Private keys and signature generation

use std::fmt;
use std::sync::Arc;

use dstu4145_algorithms::ec::{Curve, Scalar};
use dstu4145_algorithms::error::to_core_result;
use dstu4145_algorithms::{FieldElement, FieldInput};
use dstu4145_api::{Error as ApiError, Result as ApiResult};
use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::public::PublicKey;
use super::signature::Signature;

/// DSTU 4145 private key
///
/// Holds the scalar `d` with `1 <= d < n` together with the curve it
/// belongs to. The scalar is wiped when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    curve: Arc<Curve>,
    d: Scalar,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

/// Outcome of one signing attempt
enum Attempt {
    Done(Signature),
    Retry(&'static str),
}

impl PrivateKey {
    /// Wrap a scalar, rejecting values outside `[1, n-1]`
    pub fn new(curve: Arc<Curve>, d: Scalar) -> ApiResult<Self> {
        if d.is_zero() || &d >= curve.order() {
            return Err(ApiError::InvalidKey {
                context: "PrivateKey::new",
                message: "scalar must lie in [1, n-1]".into(),
            });
        }
        Ok(Self { curve, d })
    }

    pub fn from_input(curve: Arc<Curve>, input: &FieldInput) -> ApiResult<Self> {
        let d = to_core_result(Scalar::from_input(input), "PrivateKey::from_input")?;
        Self::new(curve, d)
    }

    /// Fresh key with `d` uniform in `[1, n-1]`
    pub fn generate<R: CryptoRng + RngCore>(curve: Arc<Curve>, rng: &mut R) -> ApiResult<Self> {
        let d = random_scalar(&curve, rng)?;
        Ok(Self { curve, d })
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.d
    }

    /// Big-endian scalar at the order byte length
    pub fn to_be_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.d.to_be_bytes(self.curve.order_byte_len()))
    }

    /// `Q = -(d * G)`
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(self.curve.base().mul(&self.d).negate())
    }

    /// Sign a caller-computed hash with a fresh random nonce per attempt
    ///
    /// Attempts that hit a degenerate nonce are discarded and repeated.
    pub fn sign<R: CryptoRng + RngCore>(&self, hash: &[u8], rng: &mut R) -> ApiResult<Signature> {
        let h = hash_to_field(&self.curve, hash);
        loop {
            let e = random_scalar(&self.curve, rng)?;
            match self.sign_core(&h, &e) {
                Attempt::Done(sig) => return Ok(sig),
                Attempt::Retry(why) => debug!("DSTU 4145 nonce rejected ({}), retrying", why),
            }
        }
    }

    /// Sign with a caller-supplied nonce
    ///
    /// Intended for known-answer testing. A nonce that yields a degenerate
    /// signature is reported instead of retried.
    pub fn sign_with_nonce(&self, hash: &[u8], nonce: &Scalar) -> ApiResult<Signature> {
        if nonce.is_zero() || nonce >= self.curve.order() {
            return Err(ApiError::param(
                "DSTU 4145 sign_with_nonce",
                "nonce must lie in [1, n-1]",
            ));
        }
        let h = hash_to_field(&self.curve, hash);
        match self.sign_core(&h, nonce) {
            Attempt::Done(sig) => Ok(sig),
            Attempt::Retry(why) => Err(ApiError::param("DSTU 4145 sign_with_nonce", why)),
        }
    }

    fn sign_core(&self, h: &FieldElement, e: &Scalar) -> Attempt {
        let field = self.curve.field();
        let n = self.curve.order();

        // Step 1: R = e * G
        let r_point = self.curve.base().mul(e);
        if r_point.x().is_zero() {
            return Attempt::Retry("R has zero x");
        }

        // Step 2: y = h * R.x in the field, r = y truncated below bitlen(n) - 1
        let y = field.mul(h, r_point.x());
        let r = self.curve.truncate(&y);
        if r.is_zero() {
            return Attempt::Retry("r is zero");
        }

        // Step 3: s = (d * r + e) mod n
        let s = self.d.mul_add_mod(&r, e, n);
        if s.is_zero() {
            return Attempt::Retry("s is zero");
        }

        Attempt::Done(Signature::new(r, s))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("d", &"[REDACTED]")
            .finish()
    }
}

/// Interpret a hash as a field element
///
/// Bytes are read big-endian and bits at or above `m` are dropped. A hash
/// that maps to zero is replaced by one.
pub(crate) fn hash_to_field(curve: &Curve, hash: &[u8]) -> FieldElement {
    let field = curve.field();
    let mut v = Scalar::from_be_bytes(hash);
    v.truncate_bits(field.degree());
    if v.is_zero() {
        return field.one();
    }
    field.from_be_bytes(&v.to_be_bytes(field.byte_len()))
}

/// Uniform scalar in `[1, n-1]` by rejection sampling
pub(crate) fn random_scalar<R: CryptoRng + RngCore>(
    curve: &Curve,
    rng: &mut R,
) -> ApiResult<Scalar> {
    let n = curve.order();
    let bits = n.bit_length();
    let mut buf = Zeroizing::new(vec![0u8; curve.order_byte_len()]);
    loop {
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| ApiError::from(e).with_context("DSTU 4145 random scalar"))?;
        let mut k = Scalar::from_be_bytes(&buf);
        k.truncate_bits(bits);
        if !k.is_zero() && &k < n {
            return Ok(k);
        }
    }
}
