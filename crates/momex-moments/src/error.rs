//! Errors raised while building or instantiating a moment matrix.

use momex_poly::MonomialOrder;
use thiserror::Error;

/// Errors that can occur in moment matrix construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MomentError {
    /// The moment vector does not cover the matrix's monomial support.
    #[error("moment vector has {found} values, expected {expected}")]
    LengthMismatch {
        /// Number of monomials of degree at most twice the matrix degree.
        expected: usize,
        /// Length of the supplied moment vector.
        found: usize,
    },

    /// Zero variables, or more than a packed monomial holds.
    #[error("unsupported number of variables: {0}")]
    UnsupportedVariables(usize),

    /// A degree restriction was requested under a non-graded order, where
    /// the low-degree rows are not a leading block.
    #[error("cannot restrict to degree {max_degree} under the non-graded {order} order")]
    UnsupportedOrder {
        /// The matrix's monomial order.
        order: MonomialOrder,
        /// The requested degree bound.
        max_degree: u32,
    },
}
