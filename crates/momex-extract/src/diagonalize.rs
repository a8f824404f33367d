//! Joint diagonalization of commuting multiplication operators.

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::StandardNormal;

use momex_linalg::{random_orthonormal_rows, real_schur};

use crate::error::ExtractError;

/// Orthonormal Schur vectors of a random combination of `operators`.
///
/// Draws one standard normal coefficient per operator, in order, and returns
/// the `Q` factor of the real Schur decomposition of `Σ r_i · N_i`. For
/// commuting operators with simple joint spectrum the columns of `Q`
/// triangularize every operator simultaneously.
///
/// # Errors
///
/// Propagates Schur failures. An empty operator list yields an empty basis.
pub fn schur_vectors<R: Rng + ?Sized>(
    operators: &[DMatrix<f64>],
    rng: &mut R,
) -> Result<DMatrix<f64>, ExtractError> {
    let Some(first) = operators.first() else {
        return Ok(DMatrix::zeros(0, 0));
    };

    let mut n = DMatrix::zeros(first.nrows(), first.ncols());
    for op in operators {
        let r: f64 = rng.sample(StandardNormal);
        n += op * r;
    }

    let (q, _) = real_schur(&n)?;
    Ok(q)
}

/// Projects the pencil `(A, B)` down to `count x count`.
///
/// The projection has orthonormal rows drawn from `rng`.
///
/// # Errors
///
/// Returns [`ExtractError::ProjectionTooNarrow`] when the pencil has fewer
/// than `count` rows.
pub fn project_pencil<R: Rng + ?Sized>(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    count: usize,
    rng: &mut R,
) -> Result<(DMatrix<f64>, DMatrix<f64>), ExtractError> {
    let rows = a.nrows();
    if rows < count {
        return Err(ExtractError::ProjectionTooNarrow { rows, count });
    }

    let p = random_orthonormal_rows(count, rows, rng)?;
    Ok((&p * a, &p * b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_schur_vectors_diagonalize_commuting_pair() {
        // Both operators are diagonal in the basis {(1, 1), (1, -1)}
        let s = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, -1.0]);
        let s_inv = s.clone().try_inverse().unwrap();
        let n1 = &s * DMatrix::from_diagonal(&DVector::from_vec(vec![1.0, 2.0])) * &s_inv;
        let n2 = &s * DMatrix::from_diagonal(&DVector::from_vec(vec![5.0, -3.0])) * &s_inv;

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let q = schur_vectors(&[n1.clone(), n2.clone()], &mut rng).unwrap();

        for n in [&n1, &n2] {
            let t = q.transpose() * n * &q;
            assert!(t[(1, 0)].abs() < 1e-9);
        }
    }

    #[test]
    fn test_schur_vectors_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(schur_vectors(&[], &mut rng).unwrap().len(), 0);
    }

    #[test]
    fn test_project_pencil_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let a = DMatrix::from_fn(5, 2, |i, j| (i * 2 + j) as f64);
        let b = DMatrix::from_fn(5, 2, |i, j| (i + j) as f64);

        let (pa, pb) = project_pencil(&a, &b, 2, &mut rng).unwrap();
        assert_eq!(pa.shape(), (2, 2));
        assert_eq!(pb.shape(), (2, 2));
    }

    #[test]
    fn test_project_pencil_too_narrow() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let a = DMatrix::<f64>::zeros(1, 2);

        let err = project_pencil(&a, &a, 2, &mut rng).unwrap_err();
        assert_eq!(err, ExtractError::ProjectionTooNarrow { rows: 1, count: 2 });
    }
}
