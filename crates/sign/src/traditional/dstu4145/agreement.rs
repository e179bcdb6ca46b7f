//! Cofactor Diffie-Hellman and key-encryption-key derivation

use dstu4145_api::{Error as ApiError, KeyDerivation, Result as ApiResult, SharedInfoEncoder};
use dstu4145_common::security::SecretVec;
use log::trace;

use super::private::PrivateKey;
use super::public::PublicKey;

/// Big-endian block counter appended to the shared secret
pub const KDF_COUNTER: [u8; 4] = [0, 0, 0, 1];

impl PrivateKey {
    /// Shared x-coordinate of `(cofactor * d) * Q`
    ///
    /// The result is big-endian at the field byte length. `Q` is used as
    /// given; no negation is applied on this path.
    pub fn derive(&self, public: &PublicKey) -> ApiResult<SecretVec> {
        let curve = self.curve();
        if curve.degree() != public.curve().degree() || curve.order() != public.curve().order() {
            return Err(ApiError::InvalidKey {
                context: "PrivateKey::derive",
                message: "public key belongs to a different curve".into(),
            });
        }

        let k = self.scalar().mul_small(curve.cofactor());
        let z = public.point().mul(&k);
        if z.is_identity() {
            return Err(ApiError::invalid_key("PrivateKey::derive")
                .with_message("shared point is the identity"));
        }
        Ok(SecretVec::new(z.x().to_be_bytes(curve.field().byte_len())))
    }

    /// Key-encryption key `kdf(Z || 00000001 || shared_info(ukm))`
    ///
    /// `Z` is the output of [`PrivateKey::derive`]. Failures of the injected
    /// functions are reported as `KeyDerivation` errors.
    pub fn shared_key<K, S>(
        &self,
        public: &PublicKey,
        ukm: Option<&[u8]>,
        kdf: &K,
        shared_info: &S,
    ) -> ApiResult<SecretVec>
    where
        K: KeyDerivation + ?Sized,
        S: SharedInfoEncoder + ?Sized,
    {
        let zz = self.derive(public)?;
        let info = shared_info
            .encode(ukm)
            .map_err(|e| ApiError::KeyDerivation {
                context: "shared info",
                message: e.to_string(),
            })?;

        let mut input = SecretVec::with_capacity(zz.len() + KDF_COUNTER.len() + info.len());
        input.extend_from_slice(zz.as_slice());
        input.extend_from_slice(&KDF_COUNTER);
        input.extend_from_slice(&info);
        trace!("KDF input of {} bytes", input.len());

        let kek = kdf.derive(input.as_slice()).map_err(|e| ApiError::KeyDerivation {
            context: "kdf",
            message: e.to_string(),
        })?;
        Ok(SecretVec::new(kek))
    }
}
