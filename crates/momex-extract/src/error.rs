//! Errors raised by the extraction pipeline.

use momex_linalg::LinalgError;
use momex_moments::MomentError;
use thiserror::Error;

/// Errors that can occur while extracting solutions.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExtractError {
    /// A tuning parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No singular value exceeds the tolerance.
    #[error("numerical rank is zero: no singular value exceeds {tol:e}")]
    RankDeficient {
        /// The singular value tolerance.
        tol: f64,
    },

    /// The rank estimate leaves no singular value to discard.
    #[error("rank estimate {count} leaves no discarded singular value ({available} available)")]
    RankExhausted {
        /// The rank estimate.
        count: usize,
        /// Number of singular values of the matrix.
        available: usize,
    },

    /// A reduced row has no entry above the pivot threshold.
    #[error("reduced row {row} has no entry above the pivot threshold {threshold}")]
    NoPivot {
        /// The offending row.
        row: usize,
        /// The acceptance threshold.
        threshold: f64,
    },

    /// A pivot column does not correspond to a row monomial.
    #[error("pivot column {index} is outside the {len} row monomials")]
    PivotOutOfRange {
        /// The pivot column.
        index: usize,
        /// Number of row monomials.
        len: usize,
    },

    /// `var * basis` is not a row of the (possibly restricted) matrix.
    #[error("shifted monomial {var} * {basis} is not a row of the moment matrix")]
    MissingShift {
        /// The variable, formatted.
        var: String,
        /// The basis monomial, formatted.
        basis: String,
    },

    /// Fewer shift rows than the rank estimate: the projected pencil cannot
    /// be square.
    #[error("projection needs at least {count} shift rows, found {rows}")]
    ProjectionTooNarrow {
        /// Number of shift rows.
        rows: usize,
        /// The rank estimate.
        count: usize,
    },

    /// A solution value has a vanishing denominator.
    #[error("denominator of solution {index} for {var} is {value:e}")]
    DegenerateDenominator {
        /// The variable, formatted.
        var: String,
        /// The solution index.
        index: usize,
        /// Magnitude of the denominator.
        value: f64,
    },

    /// A decomposition failed.
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// The moment matrix could not be instantiated.
    #[error(transparent)]
    Moment(#[from] MomentError),
}
