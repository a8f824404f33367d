//! Property-based tests for monomial arithmetic and orderings.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::{monomials_up_to_degree, Monomial, MonomialOrder, PackedMonomial, Variable};

    // Strategy for monomials in three variables with small exponents
    fn small_mono() -> impl Strategy<Value = PackedMonomial> {
        proptest::collection::vec(0u16..4, 3).prop_map(|e| PackedMonomial::new(&e))
    }

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    proptest! {
        #[test]
        fn mul_commutative(a in small_mono(), b in small_mono()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_adds_degrees(a in small_mono(), b in small_mono()) {
            prop_assert_eq!(a.mul(&b).total_degree(), a.total_degree() + b.total_degree());
        }

        #[test]
        fn mul_var_matches_eval(a in small_mono(), var in 0usize..3, x in -2.0f64..2.0) {
            let point = [x, 0.5, -1.5];
            let shifted = a.mul_var(&Variable(var));
            let expected = a.eval(&point) * point[var];
            prop_assert!((shifted.eval(&point) - expected).abs() < 1e-9);
        }

        #[test]
        fn order_is_antisymmetric(a in small_mono(), b in small_mono(), order in any_order()) {
            prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
            prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn graded_orders_respect_degree(a in small_mono(), b in small_mono()) {
            for order in [MonomialOrder::Grlex, MonomialOrder::Grevlex] {
                if a.total_degree() < b.total_degree() {
                    prop_assert_eq!(order.compare(&a, &b), Ordering::Less);
                }
            }
        }

        #[test]
        fn support_is_complete_and_sorted(
            num_vars in 1usize..4,
            degree in 0u32..5,
            order in any_order(),
        ) {
            let monos = monomials_up_to_degree(num_vars, degree, order);
            prop_assert_eq!(monos.len(), binomial(num_vars + degree as usize, num_vars));
            prop_assert!(monos.windows(2).all(|w| order.compare(&w[0], &w[1]) == Ordering::Less));
            prop_assert!(monos.iter().all(|m| m.total_degree() <= degree));
        }
    }
}
