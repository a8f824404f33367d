//! Errors raised by the dense linear algebra routines.

use thiserror::Error;

/// Errors that can occur in a decomposition or pencil solve.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LinalgError {
    /// An iterative decomposition hit its iteration cap.
    #[error("{0} decomposition did not converge")]
    NoConvergence(&'static str),

    /// A square matrix was required.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Operand shapes do not agree.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },

    /// The right-hand matrix of a pencil `(A, B)` is singular.
    #[error("singular pencil: right-hand matrix is not invertible")]
    SingularPencil,
}
