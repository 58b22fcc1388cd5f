//! Error types for gyrovector operations.
//!
//! This module defines the error type used throughout the library for
//! precondition violations and numerical failures. Errors are raised at the
//! point of violation and propagate to the caller; no operation retries or
//! silently clamps out-of-domain inputs.

use thiserror::Error;

/// Errors that can occur during gyrovector operations.
#[derive(Debug, Clone, Error)]
pub enum GyrovectorError {
    /// Operand vectors of unequal length passed to a binary operation.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// Point is not inside the open unit ball.
    ///
    /// This error occurs when an input point's squared norm is not strictly
    /// less than `1 - EPSILON`, i.e. the point lies on or outside the
    /// practical ball boundary.
    #[error("Point is not in the Poincaré ball: {reason}")]
    InvalidPoint {
        /// Description of why the point is invalid
        reason: String,
    },

    /// An argument fails a structural precondition.
    ///
    /// Currently raised when a required non-empty vector is empty.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the invalid argument
        reason: String,
    },

    /// Numerical instability detected.
    ///
    /// This error occurs when the Möbius addition denominator magnitude
    /// falls below `EPSILON`, signaling loss of precision near the ball
    /// boundary.
    #[error("Numerical instability detected: {reason}")]
    NumericalError {
        /// Description of the numerical issue
        reason: String,
    },
}

impl GyrovectorError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an InvalidPoint error with a custom reason.
    pub fn invalid_point<S: Into<String>>(reason: S) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }

    /// Create an InvalidArgument error with a custom reason.
    pub fn invalid_argument<S: Into<String>>(reason: S) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a NumericalError with a custom reason.
    pub fn numerical_error<S: Into<String>>(reason: S) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for gyrovector operations.
pub type Result<T> = std::result::Result<T, GyrovectorError>;
