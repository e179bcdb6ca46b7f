//! Injected capabilities for building key-encryption keys
//!
//! The key-wrapping pipeline hashes `Z || counter || SharedInfo`. Neither the
//! hash nor the DER encoding of `SharedInfo` belongs to the curve layer, so
//! both are supplied by the caller through these traits. Plain closures
//! implement them.

use crate::Result;

/// Key derivation function applied to the concatenated agreement material
pub trait KeyDerivation {
    /// Derive the key-encryption key from `input`
    fn derive(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Encoder of the `SharedInfo` structure for an optional user keying material
pub trait SharedInfoEncoder {
    /// Encode `SharedInfo` carrying `ukm`
    fn encode(&self, ukm: Option<&[u8]>) -> Result<Vec<u8>>;
}

impl<F> KeyDerivation for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn derive(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(self(input))
    }
}

impl<F> SharedInfoEncoder for F
where
    F: Fn(Option<&[u8]>) -> Vec<u8>,
{
    fn encode(&self, ukm: Option<&[u8]>) -> Result<Vec<u8>> {
        Ok(self(ukm))
    }
}
