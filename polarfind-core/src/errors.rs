//! Error types for the polarfind workspace.
//!
//! The sidereal calculators themselves are total and never fail; errors only
//! arise at the typed host boundary — validating an observer location or
//! resolving a named site. [`PolarError`] covers those cases, and
//! [`PolarResult<T>`] is the convenience alias.
//!
//! ```
//! use polarfind_core::{MathErrorKind, PolarError};
//!
//! fn require_finite(lat: f64) -> Result<f64, PolarError> {
//!     if !lat.is_finite() {
//!         return Err(PolarError::math_error(
//!             "location_validation",
//!             MathErrorKind::NotFinite,
//!             "latitude must be finite",
//!         ));
//!     }
//!     Ok(lat)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Value is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Unified error type for the polarfind crates.
#[derive(Error, Debug)]
pub enum PolarError {
    /// Numerical or domain validation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Input text could not be interpreted.
    #[error("Parse error for {input:?}: {message}")]
    ParseError { input: String, message: String },

    /// A named observer site is not in the built-in table.
    #[error("Unknown site '{0}'")]
    UnknownSite(String),
}

/// Convenience alias for `Result<T, PolarError>`.
pub type PolarResult<T> = Result<T, PolarError>;

impl PolarError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`ParseError`](Self::ParseError).
    pub fn parse_error(input: &str, reason: &str) -> Self {
        Self::ParseError {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = PolarError::math_error(
            "location_validation",
            MathErrorKind::OutOfRange,
            "latitude outside [-90, 90]",
        );
        assert!(err.to_string().contains("Math error"));
        assert!(err.to_string().contains("OutOfRange"));
        assert!(err.to_string().contains("location_validation"));
    }

    #[test]
    fn test_parse_error() {
        let err = PolarError::parse_error("12x34", "not a decimal degree value");
        assert!(err.to_string().contains("12x34"));
        assert!(err.to_string().contains("not a decimal degree value"));
    }

    #[test]
    fn test_unknown_site() {
        let err = PolarError::UnknownSite("atlantis".to_string());
        assert_eq!(err.to_string(), "Unknown site 'atlantis'");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<PolarError>();
        _assert_sync::<PolarError>();
    }
}
