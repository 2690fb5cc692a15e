//! Error types for the Gaussian elimination solver

use thiserror::Error;

/// Result type alias using [`GaussError`]
pub type Result<T> = std::result::Result<T, GaussError>;

/// Errors that can occur while building or solving a dense system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaussError {
    /// Every candidate in the pivot column was exactly zero
    #[error("The matrix is singular (zero pivot column at step {step})")]
    SingularMatrix {
        /// Elimination step at which no usable pivot was found
        step: usize,
    },

    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("System dimension must be positive")]
    EmptySystem,

    /// A component of the reference solution did not match its closed form
    #[error("Solution component {index} is {got}, expected {expected}")]
    VerificationFailed {
        index: usize,
        expected: f64,
        got: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GaussError::SingularMatrix { step: 3 };
        assert_eq!(
            err.to_string(),
            "The matrix is singular (zero pivot column at step 3)"
        );

        let err = GaussError::DimensionMismatch {
            expected: 4,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions mismatch: expected 4, got 3"
        );
    }
}
