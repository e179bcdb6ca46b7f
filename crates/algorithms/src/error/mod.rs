//! Error handling for field and curve arithmetic

use std::borrow::Cow;
use std::fmt;

use dstu4145_api::{Error as CoreError, Result as CoreResult};

/// The error type for field and curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Malformed hex, bytes or words
    Parse {
        /// What was being parsed
        context: &'static str,
        /// What was wrong with it
        details: Cow<'static, str>,
    },

    /// A curve or field shape the engine does not handle
    UnsupportedCurve {
        /// Operation that rejected the curve
        context: &'static str,
        /// Additional details
        details: Cow<'static, str>,
    },

    /// Arithmetic failure such as inverting zero or an unsolvable quadratic
    Arithmetic {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Parse error
    pub fn parse<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Parse {
            context,
            details: details.into(),
        }
    }
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Parse { context, details } => write!(f, "Cannot parse {}: {}", context, details),
            Error::UnsupportedCurve { context, details } => {
                write!(f, "Unsupported curve in {}: {}", context, details)
            }
            Error::Arithmetic { operation, details } => {
                write!(f, "Arithmetic error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Parse { context, details } => CoreError::Parse {
                context,
                message: details.into_owned(),
            },
            Error::UnsupportedCurve { context, details } => CoreError::UnsupportedCurve {
                context,
                message: details.into_owned(),
            },
            Error::Arithmetic { operation, details } => CoreError::Arithmetic {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

/// Convert an arithmetic result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
