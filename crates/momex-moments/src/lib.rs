//! # momex-moments
//!
//! Moment matrices: the structure solution extractors read from.
//!
//! [`MomentSource`] is the interface the extractors consume: ordered
//! variables, ordered row monomials and a numeric instantiation for a
//! moment vector. [`MomentMatrix`] implements it for dense monomial supports
//! up to a given degree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod moment_matrix;

pub use error::MomentError;
pub use moment_matrix::{MomentMatrix, MomentSource};
