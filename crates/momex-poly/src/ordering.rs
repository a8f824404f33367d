//! Monomial orderings and enumeration of monomial supports.
//!
//! The ordering fixes the row/column order of a moment matrix and therefore
//! which monomials the row reduction picks as pivots.

use std::cmp::Ordering;

use crate::monomial::{PackedMonomial, MAX_VARS};

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &PackedMonomial, b: &PackedMonomial) -> Ordering {
        match self {
            MonomialOrder::Lex => a.cmp_lex(b),
            MonomialOrder::Grlex => a.cmp_grlex(b),
            MonomialOrder::Grevlex => a.cmp_grevlex(b),
        }
    }

    /// Returns true for orderings that compare total degree first.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self, MonomialOrder::Grlex | MonomialOrder::Grevlex)
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns every monomial in `num_vars` variables of total degree at most
/// `degree`, sorted ascending by `order`.
///
/// # Panics
///
/// Panics if `num_vars` exceeds [`MAX_VARS`].
#[must_use]
pub fn monomials_up_to_degree(
    num_vars: usize,
    degree: u32,
    order: MonomialOrder,
) -> Vec<PackedMonomial> {
    assert!(num_vars <= MAX_VARS, "at most {MAX_VARS} variables supported");

    let mut out = Vec::new();
    let mut exps = vec![0u16; num_vars];
    enumerate(&mut exps, 0, degree, &mut out);

    out.sort_by(|a, b| order.compare(a, b));
    out
}

fn enumerate(exps: &mut [u16], var: usize, remaining: u32, out: &mut Vec<PackedMonomial>) {
    if var == exps.len() {
        out.push(PackedMonomial::new(exps));
        return;
    }
    for e in 0..=remaining {
        exps[var] = e as u16;
        enumerate(exps, var + 1, remaining - e, out);
    }
    exps[var] = 0;
}
