//! Spectral decompositions used by the extractors.
//!
//! Thin wrappers over `nalgebra` that fix the conventions the extraction
//! algorithms rely on: descending singular values, Schur factors returned as
//! `(Q, T)`, and eigenvectors of square pencils `(A, B)`.

use nalgebra::linalg::Schur;
use nalgebra::{Complex, DMatrix, DVector};

use crate::error::LinalgError;

/// Iteration cap shared by the iterative decompositions.
pub const MAX_ITERATIONS: usize = 10_000;

/// A singular value decomposition with singular values in descending order.
///
/// The decomposition is thin: for an `m x n` input with `k = min(m, n)`,
/// `u` is `m x k`, `singular_values` has length `k` and `v_t` is `k x n`.
#[derive(Clone, Debug)]
pub struct SortedSvd {
    /// Left singular vectors (columns).
    pub u: DMatrix<f64>,
    /// Singular values, largest first.
    pub singular_values: DVector<f64>,
    /// Right singular vectors (rows).
    pub v_t: DMatrix<f64>,
}

impl SortedSvd {
    /// Number of singular values strictly above `tol`.
    #[must_use]
    pub fn count_above(&self, tol: f64) -> usize {
        self.singular_values.iter().filter(|&&s| s > tol).count()
    }
}

/// Computes the thin SVD of `m` with singular values sorted descending.
///
/// # Errors
///
/// Returns [`LinalgError::NoConvergence`] if the bidiagonal iteration does
/// not converge.
pub fn sorted_svd(m: &DMatrix<f64>) -> Result<SortedSvd, LinalgError> {
    let svd = m
        .clone()
        .try_svd(true, true, f64::EPSILON, MAX_ITERATIONS)
        .ok_or(LinalgError::NoConvergence("singular value"))?;

    let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
        return Err(LinalgError::NoConvergence("singular value"));
    };
    let s = svd.singular_values;

    // Stable sort keeps ties in their original order
    let mut order: Vec<usize> = (0..s.len()).collect();
    order.sort_by(|&a, &b| s[b].total_cmp(&s[a]));

    Ok(SortedSvd {
        u: DMatrix::from_fn(u.nrows(), order.len(), |r, c| u[(r, order[c])]),
        singular_values: DVector::from_fn(order.len(), |i, _| s[order[i]]),
        v_t: DMatrix::from_fn(order.len(), v_t.ncols(), |r, c| v_t[(order[r], c)]),
    })
}

/// Real Schur decomposition `n = Q * T * Qᵗ`, returned as `(Q, T)`.
///
/// `T` is quasi upper triangular: complex conjugate eigenvalue pairs stay as
/// 2x2 diagonal blocks.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] for rectangular input and
/// [`LinalgError::NoConvergence`] if the QR iteration stalls.
pub fn real_schur(n: &DMatrix<f64>) -> Result<(DMatrix<f64>, DMatrix<f64>), LinalgError> {
    ensure_square(n)?;
    let schur = Schur::try_new(n.clone(), f64::EPSILON, MAX_ITERATIONS)
        .ok_or(LinalgError::NoConvergence("Schur"))?;
    Ok(schur.unpack())
}

/// Eigenvalues of the square pencil `A v = λ B v`.
///
/// # Errors
///
/// Fails if the pencil is not square or `B` is singular.
pub fn eigenvalues_generalized(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
) -> Result<DVector<Complex<f64>>, LinalgError> {
    let c = reduce_pencil(a, b)?;
    let (_, t) = complex_schur(&c)?;
    Ok(t.diagonal())
}

/// Eigenvalues and unit-norm eigenvectors of the square pencil `A v = λ B v`.
///
/// Column `j` of the returned matrix is the eigenvector for eigenvalue `j`.
///
/// # Errors
///
/// Fails if the pencil is not square, `B` is singular, or the Schur
/// iteration does not converge.
pub fn eigen_generalized(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
) -> Result<(DVector<Complex<f64>>, DMatrix<Complex<f64>>), LinalgError> {
    let c = reduce_pencil(a, b)?;
    let (q, t) = complex_schur(&c)?;
    let n = t.nrows();

    // Perturb exactly repeated eigenvalues instead of dividing by zero
    let small = f64::EPSILON * t.norm().max(f64::MIN_POSITIVE);

    let mut vectors = DMatrix::<Complex<f64>>::zeros(n, n);
    for k in 0..n {
        let lambda = t[(k, k)];
        let mut y = DVector::<Complex<f64>>::zeros(n);
        y[k] = Complex::new(1.0, 0.0);

        for i in (0..k).rev() {
            let mut s = Complex::new(0.0, 0.0);
            for j in i + 1..=k {
                s += t[(i, j)] * y[j];
            }
            let mut denom = t[(i, i)] - lambda;
            if denom.norm() < small {
                denom = Complex::new(small, 0.0);
            }
            y[i] = -s / denom;
        }

        let v = &q * y;
        let norm = v.norm();
        vectors.set_column(k, &v.unscale(norm));
    }

    Ok((t.diagonal(), vectors))
}

/// Reduces the pencil `(A, B)` to the standard problem `B⁻¹ A`.
fn reduce_pencil(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, LinalgError> {
    ensure_square(a)?;
    if a.shape() != b.shape() {
        return Err(LinalgError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let c = b.clone().lu().solve(a).ok_or(LinalgError::SingularPencil)?;
    if c.iter().all(|v| v.is_finite()) {
        Ok(c)
    } else {
        Err(LinalgError::SingularPencil)
    }
}

/// Complex Schur form: `T` is upper triangular with eigenvalues on the
/// diagonal.
fn complex_schur(
    c: &DMatrix<f64>,
) -> Result<(DMatrix<Complex<f64>>, DMatrix<Complex<f64>>), LinalgError> {
    let cz = c.map(|v| Complex::new(v, 0.0));
    let schur = Schur::try_new(cz, f64::EPSILON, MAX_ITERATIONS)
        .ok_or(LinalgError::NoConvergence("complex Schur"))?;
    Ok(schur.unpack())
}

fn ensure_square(m: &DMatrix<f64>) -> Result<(), LinalgError> {
    if m.is_square() {
        Ok(())
    } else {
        Err(LinalgError::NotSquare {
            rows: m.nrows(),
            cols: m.ncols(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_real_parts(values: &DVector<Complex<f64>>) -> Vec<f64> {
        let mut re: Vec<f64> = values.iter().map(|z| z.re).collect();
        re.sort_by(f64::total_cmp);
        re
    }

    #[test]
    fn test_sorted_svd_descending_and_reconstructs() {
        let m = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 5.0, 0.0, 0.0]);
        let svd = sorted_svd(&m).unwrap();

        assert!((svd.singular_values[0] - 5.0).abs() < 1e-12);
        assert!((svd.singular_values[1] - 1.0).abs() < 1e-12);
        assert_eq!(svd.u.shape(), (3, 2));
        assert_eq!(svd.v_t.shape(), (2, 2));

        let sigma = DMatrix::from_diagonal(&svd.singular_values);
        let rebuilt = &svd.u * sigma * &svd.v_t;
        assert!((rebuilt - m).amax() < 1e-12);
    }

    #[test]
    fn test_count_above() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let svd = sorted_svd(&m).unwrap();
        assert_eq!(svd.count_above(1e-8), 1);
    }

    #[test]
    fn test_real_schur_reconstructs() {
        let n = DMatrix::from_row_slice(2, 2, &[0.0, -2.0, 1.0, 3.0]);
        let (q, t) = real_schur(&n).unwrap();

        let rebuilt = &q * &t * q.transpose();
        assert!((rebuilt - &n).amax() < 1e-10);

        let mut diag = vec![t[(0, 0)], t[(1, 1)]];
        diag.sort_by(f64::total_cmp);
        assert!((diag[0] - 1.0).abs() < 1e-10);
        assert!((diag[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_real_schur_rejects_rectangular() {
        let n = DMatrix::<f64>::zeros(2, 3);
        assert_eq!(
            real_schur(&n).unwrap_err(),
            LinalgError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_generalized_eigenvalues() {
        // B⁻¹A = diag(2, 3)
        let a = DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 6.0]);
        let b = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 2.0]);
        let values = eigenvalues_generalized(&a, &b).unwrap();
        let re = sorted_real_parts(&values);
        assert!((re[0] - 2.0).abs() < 1e-10);
        assert!((re[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_generalized_eigenvectors_satisfy_pencil() {
        let a = DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.0, 2.0, 3.0, 1.0, 0.0, 1.0, 5.0]);
        let b = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 3.0]);
        let (values, vectors) = eigen_generalized(&a, &b).unwrap();

        let az = a.map(|v| Complex::new(v, 0.0));
        let bz = b.map(|v| Complex::new(v, 0.0));
        for j in 0..3 {
            let v = vectors.column(j);
            let residual = &az * v - (&bz * v) * values[j];
            assert!(residual.norm() < 1e-8, "residual {}", residual.norm());
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_generalized_complex_pair() {
        // Rotation: eigenvalues ±i
        let a = DMatrix::from_row_slice(2, 2, &[0.0, -1.0, 1.0, 0.0]);
        let b = DMatrix::identity(2, 2);
        let values = eigenvalues_generalized(&a, &b).unwrap();
        for z in values.iter() {
            assert!(z.re.abs() < 1e-10);
            assert!((z.im.abs() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_singular_pencil() {
        let a = DMatrix::identity(2, 2);
        let b = DMatrix::zeros(2, 2);
        assert_eq!(
            eigenvalues_generalized(&a, &b).unwrap_err(),
            LinalgError::SingularPencil
        );
    }
}
