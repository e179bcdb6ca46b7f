//! Digital signature traits
//!
//! A DSTU 4145 scheme is bound to a curve chosen at run time, so unlike a
//! fixed-curve interface every method takes the scheme instance.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for signature schemes operating on pre-computed hashes
pub trait Signature {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type, zeroizable and not byte-accessible
    type SecretKey: Zeroize;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature scheme
    fn name(&self) -> &str;

    /// Generate a new key pair using the provided RNG
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Sign a hash value with the given secret key
    fn sign<R: CryptoRng + RngCore>(
        &self,
        hash: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature over a hash value
    ///
    /// A signature that does not verify yields `Error::InvalidSignature`.
    fn verify(
        &self,
        hash: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
