//! Integration tests for momex-linalg.

#[cfg(test)]
mod integration_tests {
    use nalgebra::DMatrix;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{
        eigenvalues_generalized, leading_columns, random_orthonormal_rows, row_normalize_leading_one,
        sorted_svd, srref, ReductionConfig,
    };

    /// Moment matrix of 0.5·δ(1) + 0.5·δ(2) indexed by 1, x, x².
    fn two_root_moments() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 3, &[1.0, 1.5, 2.5, 1.5, 2.5, 4.5, 2.5, 4.5, 8.5])
    }

    #[test]
    fn test_svd_then_srref_recovers_shift_relation() {
        let m = two_root_moments();
        let svd = sorted_svd(&m).unwrap();
        assert_eq!(svd.count_above(1e-6), 2);

        let top = svd.v_t.rows(0, 2).into_owned();
        let config = ReductionConfig::default();
        let reduced = srref(&top, &config);
        let ut = row_normalize_leading_one(&reduced.reduced, config.zero_tol);

        assert_eq!(
            leading_columns(&ut, config.pivot_threshold),
            vec![Some(0), Some(1)]
        );
        // x² = -2 + 3x on the support {1, 2}
        assert!((ut[(0, 2)] + 2.0).abs() < 1e-8);
        assert!((ut[(1, 2)] - 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_projected_pencil_eigenvalues() {
        // Shift pencil of the two-root measure: rows {1, x} against {x, x²}
        let m = two_root_moments();
        let svd = sorted_svd(&m).unwrap();
        let z = svd.u.columns(0, 2).into_owned();

        let a = z.rows(1, 2).into_owned();
        let b = z.rows(0, 2).into_owned();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = random_orthonormal_rows(2, 2, &mut rng).unwrap();

        let values = eigenvalues_generalized(&(&p * &a), &(&p * &b)).unwrap();
        let mut re: Vec<f64> = values.iter().map(|z| z.re).collect();
        re.sort_by(f64::total_cmp);
        assert!((re[0] - 1.0).abs() < 1e-8);
        assert!((re[1] - 2.0).abs() < 1e-8);
    }
}
