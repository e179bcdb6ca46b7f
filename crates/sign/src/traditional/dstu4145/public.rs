//! Public keys, key validation and signature verification

use std::sync::{Arc, OnceLock};

use dstu4145_algorithms::ec::{Curve, Point};
use dstu4145_algorithms::error::{to_core_result, validate};
use dstu4145_algorithms::{FieldElement, FieldInput};
use dstu4145_api::{Error as ApiError, Result as ApiResult};
use dstu4145_params::dstu4145::OCTET_STRING_TAG;
use subtle::ConstantTimeEq;
use thiserror::Error;

use super::private::hash_to_field;
use super::signature::Signature;

/// Why a public key failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyRejection {
    #[error("public key is the identity point")]
    Identity,
    #[error("public key is not on the curve")]
    NotOnCurve,
    #[error("public key does not have the base point order")]
    WrongOrder,
}

/// Why a signature was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureRejection {
    #[error("signature component outside [1, n-1]")]
    ComponentOutOfRange,
    #[error("recovered point is the identity")]
    IdentityPoint,
    #[error("signature does not match")]
    Mismatch,
}

/// Source of a public key
#[derive(Debug, Clone)]
pub enum PublicKeyInput {
    /// Point already on the target curve
    Point(Point),
    /// Affine coordinates
    Affine { x: FieldInput, y: FieldInput },
    /// DSTU compressed x-coordinate
    Compressed(FieldInput),
    /// `0x04 || len || compressed little-endian`, as produced by
    /// [`PublicKey::serialize`]
    Serialized(Vec<u8>),
}

impl From<Point> for PublicKeyInput {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

/// DSTU 4145 public key `Q`
///
/// Keys built from external data are not validated on construction; call
/// [`PublicKey::validate`] before trusting one.
#[derive(Clone, Debug)]
pub struct PublicKey {
    point: Point,
    serialized: OnceLock<Vec<u8>>,
}

impl PublicKey {
    pub fn from_point(point: Point) -> Self {
        Self {
            point,
            serialized: OnceLock::new(),
        }
    }

    pub fn from_input(curve: Arc<Curve>, input: PublicKeyInput) -> ApiResult<Self> {
        let ctx = "PublicKey::from_input";
        let point = match input {
            PublicKeyInput::Point(p) => {
                if !Arc::ptr_eq(p.curve(), &curve) {
                    return Err(ApiError::InvalidKey {
                        context: ctx,
                        message: "point belongs to a different curve".into(),
                    });
                }
                p
            }
            PublicKeyInput::Affine { x, y } => to_core_result(curve.point_from(&x, &y), ctx)?,
            PublicKeyInput::Compressed(c) => {
                let c = to_core_result(curve.field().element(&c), ctx)?;
                to_core_result(curve.expand(&c), ctx)?
            }
            PublicKeyInput::Serialized(bytes) => return Self::from_serialized(curve, &bytes),
        };
        Ok(Self::from_point(point))
    }

    /// Parse the `0x04 || len || compressed little-endian` form
    pub fn from_serialized(curve: Arc<Curve>, bytes: &[u8]) -> ApiResult<Self> {
        let ctx = "PublicKey::from_serialized";
        let len = curve.field().byte_len();
        to_core_result(validate::length("serialized public key", bytes.len(), len + 2), ctx)?;
        if bytes[0] != OCTET_STRING_TAG || bytes[1] as usize != len {
            return Err(ApiError::Parse {
                context: ctx,
                message: format!("expected header {:02x} {:02x}", OCTET_STRING_TAG, len),
            });
        }

        let c = FieldElement::from_le_bytes(&bytes[2..]);
        let point = to_core_result(curve.expand(&c), ctx)?;
        Ok(Self::from_point(point))
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn curve(&self) -> &Arc<Curve> {
        self.point.curve()
    }

    pub fn compressed(&self) -> FieldElement {
        self.point.compress()
    }

    /// `0x04 || ceil(m/8) || compressed x little-endian`, used for key identifiers
    pub fn serialize(&self) -> &[u8] {
        self.serialized.get_or_init(|| {
            let len = self.curve().field().byte_len();
            let mut out = Vec::with_capacity(len + 2);
            out.push(OCTET_STRING_TAG);
            out.push(len as u8);
            out.extend_from_slice(&self.compressed().to_le_bytes(len));
            out
        })
    }

    /// Full public key check: not the identity, on the curve, order `n`
    pub fn check_validity(&self) -> Result<(), KeyRejection> {
        let q = &self.point;
        if q.is_identity() {
            return Err(KeyRejection::Identity);
        }
        if !q.is_on_curve() {
            return Err(KeyRejection::NotOnCurve);
        }
        if !q.mul(self.curve().order()).is_identity() {
            return Err(KeyRejection::WrongOrder);
        }
        Ok(())
    }

    pub fn validate(&self) -> bool {
        self.check_validity().is_ok()
    }

    /// Verify `(r, s)` over a caller-computed hash
    pub fn check(&self, hash: &[u8], sig: &Signature) -> Result<(), SignatureRejection> {
        let curve = self.curve();
        let n = curve.order();
        let (r, s) = (sig.r(), sig.s());
        if r.is_zero() || s.is_zero() || r >= n || s >= n {
            return Err(SignatureRejection::ComponentOutOfRange);
        }

        let h = hash_to_field(curve, hash);

        // R' = s * G + r * Q
        let recovered = curve.base().mul(s).add(&self.point.mul(r));
        if recovered.is_identity() {
            return Err(SignatureRejection::IdentityPoint);
        }

        let y = curve.field().mul(&h, recovered.x());
        let r_prime = curve.truncate(&y);

        if bool::from(r.ct_eq(&r_prime)) {
            Ok(())
        } else {
            Err(SignatureRejection::Mismatch)
        }
    }

    pub fn verify(&self, hash: &[u8], sig: &Signature) -> bool {
        self.check(hash, sig).is_ok()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PublicKey {}
