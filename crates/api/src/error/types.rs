//! Error type definitions for DSTU 4145 operations

use thiserror::Error;

/// Primary error type for DSTU 4145 operations
///
/// Rejected signatures and invalid public keys found by `verify` / `validate`
/// are reported as values by those operations; the `InvalidSignature` and
/// `InvalidKey` variants here cover malformed input and trait-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed textual or binary input
    #[error("Parse error in {context}: {message}")]
    Parse {
        context: &'static str,
        message: String,
    },

    /// Curve shape the engine cannot handle (for example an even field degree)
    #[error("Unsupported curve in {context}: {message}")]
    UnsupportedCurve {
        context: &'static str,
        message: String,
    },

    /// Field arithmetic failure (zero inversion, unsolvable quadratic)
    #[error("Arithmetic error in {context}: {message}")]
    Arithmetic {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("Invalid key in {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error
    #[error("Invalid signature in {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("Invalid parameter in {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The random source could not supply bytes
    #[error("Random generation failed in {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// The injected key derivation or shared-info encoder failed
    #[error("Key derivation failed in {context}: {message}")]
    KeyDerivation {
        context: &'static str,
        message: String,
    },
}

/// Result type for DSTU 4145 operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an `InvalidKey` error without a message
    pub fn invalid_key(context: &'static str) -> Self {
        Self::InvalidKey {
            context,
            message: String::new(),
        }
    }

    /// Shorthand for an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse { context, message },
            Self::UnsupportedCurve { message, .. } => Self::UnsupportedCurve { context, message },
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::KeyDerivation { message, .. } => Self::KeyDerivation { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::Parse { context, .. } => Self::Parse { context, message },
            Self::UnsupportedCurve { context, .. } => Self::UnsupportedCurve { context, message },
            Self::Arithmetic { context, .. } => Self::Arithmetic { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::KeyDerivation { context, .. } => Self::KeyDerivation { context, message },
        }
    }
}
