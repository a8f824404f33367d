//! # momex-linalg
//!
//! Dense floating-point linear algebra for moment-based solution extraction.
//!
//! This crate provides:
//! - Stabilized reduced row echelon form and leading-one normalization
//! - Singular value decomposition with descending singular values
//! - Real and complex Schur decompositions
//! - Eigenvalues and eigenvectors of square matrix pencils
//! - Random Gaussian matrices and orthonormal projections
//!
//! All routines are pure: inputs are borrowed and results are new matrices.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod decomposition;
pub mod error;
pub mod random;
pub mod reduction;

pub use decomposition::{
    eigen_generalized, eigenvalues_generalized, real_schur, sorted_svd, SortedSvd,
};
pub use error::LinalgError;
pub use random::{random_orthonormal_rows, standard_normal_matrix};
pub use reduction::{leading_columns, row_normalize_leading_one, srref, Reduced, ReductionConfig};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
