//! Error types for the linear solvers

use thiserror::Error;

/// Result type alias using [`LinsolveError`]
pub type Result<T> = std::result::Result<T, LinsolveError>;

/// Errors that can occur while factorizing, eliminating or iterating
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinsolveError {
    /// A required pivot (or diagonal entry) is zero
    #[error("Matrix is singular: zero pivot at step {step}")]
    SingularMatrix {
        /// Row/column index where the zero pivot was met
        step: usize,
    },

    /// An operand does not have the size the matrix requires
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// An index sequence is not a bijection over `0..n`
    #[error("Invalid permutation: {:?} is not a bijection over 0..{}", .indices, .indices.len())]
    InvalidPermutation {
        /// The rejected indices
        indices: Vec<usize>,
    },

    /// An iterative solver stopped on its iteration ceiling
    #[error("Iteration did not converge after {iterations} iterations")]
    NonConvergence {
        /// Number of iterations performed
        iterations: usize,
    },
}

impl LinsolveError {
    pub(crate) fn check_len(expected: usize, got: usize) -> Result<()> {
        if expected == got {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, got })
        }
    }
}
