//! DSTU 4145-2002 signatures over binary elliptic curves
//!
//! Keys are bound to a curve at run time. The private key is a scalar
//! `d` in `[1, n-1]`; the public key is `Q = -(d * G)`, so that verification
//! recovers `e * G` as `s * G + r * Q`.
//!
//! Signatures operate on a hash computed by the caller and are returned as
//! the integer pair `(r, s)` with byte encodings in [`Signature`].

mod agreement;
mod private;
mod public;
mod signature;


use std::sync::Arc;

use dstu4145_algorithms::ec::{resolve_curve, Curve, CurveRef, Scalar};
use dstu4145_algorithms::error::to_core_result;
use dstu4145_algorithms::FieldInput;
use dstu4145_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use rand::{CryptoRng, RngCore};

pub use agreement::KDF_COUNTER;
pub use private::PrivateKey;
pub use public::{KeyRejection, PublicKey, PublicKeyInput, SignatureRejection};
pub use signature::Signature;

/// Key construction bound to a curve
pub trait CurveKeys {
    /// Private key from a scalar in any supported representation
    fn private_key(&self, input: &FieldInput) -> ApiResult<PrivateKey>;

    /// Public key from a point, coordinates, compressed or serialized form
    fn public_key(&self, input: PublicKeyInput) -> ApiResult<PublicKey>;
}

impl CurveKeys for Arc<Curve> {
    fn private_key(&self, input: &FieldInput) -> ApiResult<PrivateKey> {
        let d = to_core_result(Scalar::from_input(input), "CurveKeys::private_key")?;
        PrivateKey::new(self.clone(), d)
    }

    fn public_key(&self, input: PublicKeyInput) -> ApiResult<PublicKey> {
        PublicKey::from_input(self.clone(), input)
    }
}

/// DSTU 4145 signature scheme on one curve
#[derive(Clone, Debug)]
pub struct Dstu4145 {
    curve: Arc<Curve>,
}

impl Dstu4145 {
    /// Scheme on a named curve or explicit parameters
    pub fn new<'a>(curve: impl Into<CurveRef<'a>>) -> ApiResult<Self> {
        let curve = to_core_result(resolve_curve(curve), "Dstu4145::new")?;
        Ok(Self { curve })
    }

    pub fn with_curve(curve: Arc<Curve>) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }
}

impl SignatureTrait for Dstu4145 {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = Signature;

    fn name(&self) -> &str {
        self.curve.name().unwrap_or("DSTU 4145")
    }

    /// Generate `d` uniformly in `[1, n-1]` and `Q = -(d * G)`
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let secret = PrivateKey::generate(self.curve.clone(), rng)?;
        Ok((secret.public_key(), secret))
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        hash: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        secret_key.sign(hash, rng)
    }

    fn verify(
        &self,
        hash: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        public_key
            .check(hash, signature)
            .map_err(|why| ApiError::InvalidSignature {
                context: "DSTU 4145 verify",
                message: why.to_string(),
            })
    }
}
