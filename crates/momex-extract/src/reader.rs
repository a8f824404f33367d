//! Reading solution values off a joint eigenbasis.

use nalgebra::{Complex, DMatrix};

use crate::error::ExtractError;

/// `qⱼᵗ · N · qⱼ` for every column `qⱼ` of `q`.
#[must_use]
pub fn quadratic_forms(n: &DMatrix<f64>, q: &DMatrix<f64>) -> Vec<f64> {
    let nq = n * q;
    q.column_iter()
        .zip(nq.column_iter())
        .map(|(qj, nqj)| qj.dot(&nqj))
        .collect()
}

/// Per-column ratios `Σ (A·V ⊙ B·V) / Σ (B·V ⊙ B·V)`, real parts.
///
/// The products are not conjugated, so each ratio is unchanged by a complex
/// rescaling of the corresponding eigenvector.
///
/// # Errors
///
/// Returns [`ExtractError::DegenerateDenominator`] for the first column
/// whose denominator has magnitude at or below `tol`.
pub fn rayleigh_ratios(
    var: &str,
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    v: &DMatrix<Complex<f64>>,
    tol: f64,
) -> Result<Vec<f64>, ExtractError> {
    let av = complexify(a) * v;
    let bv = complexify(b) * v;

    av.column_iter()
        .zip(bv.column_iter())
        .enumerate()
        .map(|(index, (avj, bvj))| {
            let num: Complex<f64> = avj.iter().zip(bvj.iter()).map(|(x, y)| x * y).sum();
            let den: Complex<f64> = bvj.iter().map(|y| y * y).sum();

            if den.norm() <= tol {
                return Err(ExtractError::DegenerateDenominator {
                    var: var.to_owned(),
                    index,
                    value: den.norm(),
                });
            }
            Ok((num / den).re)
        })
        .collect()
}

fn complexify(m: &DMatrix<f64>) -> DMatrix<Complex<f64>> {
    m.map(|x| Complex::new(x, 0.0))
}
