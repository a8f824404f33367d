//! Nullspace extraction.
//!
//! The column space of the moment matrix is shift-invariant: selecting the
//! rows of its basis `Z` at the monomials `m` and at `m * var` gives a pencil
//! `(Sg·Z, S1·Z)` whose eigenvalues are the values of `var` at the
//! solutions. The tall pencil is made square by a random projection with
//! orthonormal rows.

use nalgebra::DMatrix;
use rand::Rng;
use tracing::info;

use momex_linalg::{eigen_generalized, eigenvalues_generalized};
use momex_moments::MomentSource;

use crate::basis::RankEstimate;
use crate::config::ExtractionConfig;
use crate::diagonalize::project_pencil;
use crate::error::ExtractError;
use crate::operators::{monomial_index, shift_selections, ShiftSelection};
use crate::reader::rayleigh_ratios;
use crate::solutions::Solutions;
use crate::VarOf;

/// Truncated column space of the full moment matrix.
fn column_space<S: MomentSource + ?Sized>(
    mm: &S,
    ys: &[f64],
    config: &ExtractionConfig,
) -> Result<(DMatrix<f64>, usize), ExtractError> {
    config.validate()?;
    let m = mm.numeric_instance(ys, None)?;

    let rank = RankEstimate::new(&m, config.k_max, config.tol)?;
    info!(
        discarded = rank.discarded(),
        count = rank.count,
        "next largest singular value lost to truncation"
    );

    Ok((rank.column_space(), rank.count))
}

/// Extracts each variable's values from its own pencil.
///
/// Every variable gets an independent random projection, so the values are
/// recovered component-wise: position `j` of one variable's sequence does
/// NOT in general belong to the same solution as position `j` of another's.
///
/// # Errors
///
/// Fails on invalid parameters, a malformed moment vector, a degenerate rank
/// estimate, a variable with fewer shift rows than the rank, or a singular
/// projected pencil.
pub fn extract_solutions_dreesen_proto<S, R>(
    mm: &S,
    ys: &[f64],
    config: &ExtractionConfig,
    rng: &mut R,
) -> Result<Solutions<VarOf<S>>, ExtractError>
where
    S: MomentSource + ?Sized,
    R: Rng + ?Sized,
{
    let (z, count) = column_space(mm, ys, config)?;

    let row_monos = mm.row_monos();
    let selections = shift_selections(row_monos, mm.vars(), &monomial_index(row_monos));

    let mut columns = Vec::with_capacity(selections.len());
    for (var, selection) in mm.vars().iter().zip(&selections) {
        let (a, b) = selection.project(&z);
        let (pa, pb) = project_pencil(&a, &b, count, rng)?;

        let values = eigenvalues_generalized(&pa, &pb)?;
        columns.push((var.clone(), values.iter().map(|l| l.re).collect::<Vec<_>>()));
    }

    Ok(Solutions::from_columns(columns))
}

/// Extracts matched solutions from one shared eigenbasis.
///
/// The shift selections of all variables are stacked into a single pencil,
/// projected once, and its eigenvectors `V` are shared. Each variable's
/// values are then read from its own block as
/// `Σ (Aᵢ·V ⊙ Bᵢ·V) / Σ (Bᵢ·V ⊙ Bᵢ·V)`, so position `j` is the same solution
/// for every variable.
///
/// With one variable the read-off is exact on exact moments. With several,
/// the blocks have different shift eigenvalues, so the stacked pencil only
/// approximately shares eigenvectors and the values are approximate.
///
/// # Errors
///
/// As [`extract_solutions_dreesen_proto`], and
/// [`ExtractError::DegenerateDenominator`] when a block's denominator is at
/// or below `config.denominator_tol`.
pub fn extract_solutions_dreesen<S, R>(
    mm: &S,
    ys: &[f64],
    config: &ExtractionConfig,
    rng: &mut R,
) -> Result<Solutions<VarOf<S>>, ExtractError>
where
    S: MomentSource + ?Sized,
    R: Rng + ?Sized,
{
    let (z, count) = column_space(mm, ys, config)?;

    let row_monos = mm.row_monos();
    let selections = shift_selections(row_monos, mm.vars(), &monomial_index(row_monos));
    let stacked = ShiftSelection::stack(&selections, row_monos.len());

    let (a, b) = stacked.project(&z);
    let (pa, pb) = project_pencil(&a, &b, count, rng)?;
    let (_, v) = eigen_generalized(&pa, &pb)?;

    let columns = mm
        .vars()
        .iter()
        .zip(&selections)
        .map(|(var, selection)| {
            let (ai, bi) = selection.project(&z);
            let values = rayleigh_ratios(&format!("{var:?}"), &ai, &bi, &v, config.denominator_tol)?;
            Ok((var.clone(), values))
        })
        .collect::<Result<Vec<_>, ExtractError>>()?;

    Ok(Solutions::from_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use momex_moments::MomentMatrix;
    use momex_poly::{MonomialOrder, Variable};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const YS: [f64; 5] = [1.0, 1.5, 2.5, 4.5, 8.5];

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut v = values.to_vec();
        v.sort_by(f64::total_cmp);
        v
    }

    #[test]
    fn test_proto_univariate_two_roots() {
        let mm = MomentMatrix::new(1, 2, MonomialOrder::Grevlex).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let sols = extract_solutions_dreesen_proto(&mm, &YS, &ExtractionConfig::dreesen(), &mut rng)
            .unwrap();
        let xs = sorted(sols.get(&Variable(0)).unwrap());
        assert!((xs[0] - 1.0).abs() < 1e-6);
        assert!((xs[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_joint_univariate_two_roots() {
        let mm = MomentMatrix::new(1, 2, MonomialOrder::Grevlex).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let sols = extract_solutions_dreesen(&mm, &YS, &ExtractionConfig::dreesen(), &mut rng)
            .unwrap();
        let xs = sorted(sols.get(&Variable(0)).unwrap());
        assert!((xs[0] - 1.0).abs() < 1e-6);
        assert!((xs[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_rank_exhausted() {
        // Three atoms fill the 3x3 univariate matrix
        let mm = MomentMatrix::new(1, 2, MonomialOrder::Grevlex).unwrap();
        let ys = mm.moments_of_atoms(&[
            (0.3, vec![1.0]),
            (0.3, vec![2.0]),
            (0.4, vec![-1.0]),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let err = extract_solutions_dreesen(&mm, &ys, &ExtractionConfig::dreesen(), &mut rng)
            .unwrap_err();
        assert_eq!(err, ExtractError::RankExhausted { count: 3, available: 3 });
    }
}
