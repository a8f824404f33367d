//! Random matrices for generic combinations and projections.
//!
//! Every routine takes the random source explicitly; callers that need
//! reproducible output pass a seeded generator.

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::decomposition::sorted_svd;
use crate::error::LinalgError;

/// Draws a `rows x cols` matrix with independent standard normal entries.
pub fn standard_normal_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |_, _| rng.sample(StandardNormal))
}

/// Draws a random projection with orthonormal rows.
///
/// The result is the thin right singular factor of a `rows x cols` standard
/// normal matrix, so it has `min(rows, cols)` rows.
///
/// # Errors
///
/// Propagates SVD non-convergence.
pub fn random_orthonormal_rows<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<DMatrix<f64>, LinalgError> {
    let g = standard_normal_matrix(rows, cols, rng);
    Ok(sorted_svd(&g)?.v_t)
}
