//! Property-based tests for row reduction.

#[cfg(test)]
mod tests {
    use nalgebra::DMatrix;
    use proptest::prelude::*;

    use crate::{leading_columns, row_normalize_leading_one, srref, ReductionConfig};

    // Strategy for small dense matrices with integer-valued entries
    fn small_matrix() -> impl Strategy<Value = DMatrix<f64>> {
        (1usize..5, 1usize..6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(-9i32..10, rows * cols)
                .prop_map(move |v| {
                    DMatrix::from_iterator(rows, cols, v.into_iter().map(f64::from))
                })
        })
    }

    proptest! {
        #[test]
        fn srref_transform_reproduces_reduced(a in small_matrix()) {
            let r = srref(&a, &ReductionConfig::default());
            let residual = (&r.transform * &a - &r.reduced).amax();
            prop_assert!(residual < 1e-8);
        }

        #[test]
        fn srref_pivots_are_unit_columns(a in small_matrix()) {
            let r = srref(&a, &ReductionConfig::default());
            for (row, &col) in r.pivots.iter().enumerate() {
                for k in 0..a.nrows() {
                    let expected = if k == row { 1.0 } else { 0.0 };
                    prop_assert_eq!(r.reduced[(k, col)], expected);
                }
            }
        }

        #[test]
        fn srref_pivots_strictly_increase(a in small_matrix()) {
            let r = srref(&a, &ReductionConfig::default());
            prop_assert!(r.pivots.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(r.rank() <= a.nrows().min(a.ncols()));
        }

        #[test]
        fn leading_columns_in_range(a in small_matrix()) {
            let config = ReductionConfig::default();
            let r = srref(&a, &config);
            let ut = row_normalize_leading_one(&r.reduced, config.zero_tol);
            let leads = leading_columns(&ut, config.pivot_threshold);

            prop_assert_eq!(leads.len(), a.nrows());
            for (row, lead) in leads.iter().enumerate() {
                if let Some(col) = lead {
                    prop_assert!(*col < ut.ncols());
                }
                if row < r.rank() {
                    prop_assert_eq!(*lead, Some(r.pivots[row]));
                }
            }
        }
    }
}
