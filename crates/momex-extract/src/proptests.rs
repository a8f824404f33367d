//! Property-based tests for extraction on random two-atom measures.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use momex_moments::{MomentMatrix, MomentSource};
    use momex_poly::{MonomialOrder, Variable};

    use crate::{
        extract_solutions_dreesen, extract_solutions_lasserre, select_basis, ExtractionConfig,
        RankEstimate,
    };

    // Two well-separated roots with non-negligible weights
    fn two_atoms() -> impl Strategy<Value = (f64, f64, f64)> {
        (-2.0f64..2.0, 0.5f64..2.0, 0.2f64..0.8).prop_map(|(a, gap, w)| (a, a + gap, w))
    }

    fn univariate_moments(a: f64, b: f64, w: f64) -> (MomentMatrix, Vec<f64>) {
        let mm = MomentMatrix::new(1, 2, MonomialOrder::Grevlex).unwrap();
        let ys = mm.moments_of_atoms(&[(w, vec![a]), (1.0 - w, vec![b])]);
        (mm, ys)
    }

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut v = values.to_vec();
        v.sort_by(f64::total_cmp);
        v
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn lasserre_recovers_roots((a, b, w) in two_atoms(), seed in any::<u64>()) {
            let (mm, ys) = univariate_moments(a, b, w);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let sols = extract_solutions_lasserre(&mm, &ys, &ExtractionConfig::default(), &mut rng).unwrap();
            let xs = sorted(sols.get(&Variable(0)).unwrap());
            prop_assert!((xs[0] - a).abs() < 1e-4);
            prop_assert!((xs[1] - b).abs() < 1e-4);
        }

        #[test]
        fn dreesen_recovers_roots((a, b, w) in two_atoms(), seed in any::<u64>()) {
            let (mm, ys) = univariate_moments(a, b, w);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let sols = extract_solutions_dreesen(&mm, &ys, &ExtractionConfig::dreesen(), &mut rng).unwrap();
            let xs = sorted(sols.get(&Variable(0)).unwrap());
            prop_assert!((xs[0] - a).abs() < 1e-4);
            prop_assert!((xs[1] - b).abs() < 1e-4);
        }

        #[test]
        fn basis_is_drawn_from_row_monomials((a, b, w) in two_atoms(), k_max in 1usize..4) {
            let (mm, ys) = univariate_moments(a, b, w);
            let m = mm.numeric_instance(&ys, None).unwrap();
            let config = ExtractionConfig::default();

            let rank = RankEstimate::new(&m, k_max, config.tol).unwrap();
            prop_assert_eq!(rank.count, k_max.min(2));

            let selection = select_basis(&rank.row_space(), mm.row_monos(), &config.reduction).unwrap();
            prop_assert_eq!(selection.basis.len(), rank.count);
            for (&pivot, mono) in selection.pivots.iter().zip(&selection.basis) {
                prop_assert!(pivot < selection.reduced.ncols());
                prop_assert!(mm.row_monos().contains(mono));
            }
        }
    }
}
