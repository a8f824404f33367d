//! Extraction by row reduction and simultaneous Schur triangularization.
//!
//! The reduced row space of the moment matrix gives one multiplication
//! matrix per variable over the selected basis. A random combination of
//! these is Schur-decomposed; its Schur vectors read each variable's values
//! off the diagonal of the corresponding quadratic forms.

use nalgebra::DMatrix;
use rand::Rng;
use tracing::trace;

use momex_moments::MomentSource;

use crate::basis::{select_basis, RankEstimate};
use crate::config::ExtractionConfig;
use crate::diagonalize::schur_vectors;
use crate::error::ExtractError;
use crate::operators::{lasserre_operators, monomial_index};
use crate::reader::quadratic_forms;
use crate::solutions::Solutions;
use crate::VarOf;

/// Extracts solutions in a single pass.
///
/// With `config.max_degree`, only the leading block of the moment matrix up
/// to that degree is used; every shifted basis monomial must then still fall
/// inside that block.
///
/// # Errors
///
/// Fails on invalid parameters, a malformed moment vector, a rank estimate
/// of zero or one that leaves no discarded singular value, a row without
/// pivot, a missing shifted monomial, or a failed decomposition.
///
/// # Example
///
/// ```
/// use momex_extract::{extract_solutions_lasserre, ExtractionConfig};
/// use momex_moments::MomentMatrix;
/// use momex_poly::{MonomialOrder, Variable};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mm = MomentMatrix::new(1, 2, MonomialOrder::Grevlex).unwrap();
/// let ys = [1.0, 1.5, 2.5, 4.5, 8.5];
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
///
/// let sols = extract_solutions_lasserre(&mm, &ys, &ExtractionConfig::default(), &mut rng).unwrap();
/// let mut xs = sols.get(&Variable(0)).unwrap().to_vec();
/// xs.sort_by(f64::total_cmp);
/// assert!((xs[0] - 1.0).abs() < 1e-6 && (xs[1] - 2.0).abs() < 1e-6);
/// ```
pub fn extract_solutions_lasserre<S, R>(
    mm: &S,
    ys: &[f64],
    config: &ExtractionConfig,
    rng: &mut R,
) -> Result<Solutions<VarOf<S>>, ExtractError>
where
    S: MomentSource + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    let m = mm.numeric_instance(ys, config.max_degree)?;

    let rank = RankEstimate::new(&m, config.k_max, config.tol)?;
    rank.report(config.tol);

    solve_from_rows(mm, &rank.row_space(), m.nrows(), config, rng)
}

/// Extracts solutions `config.num_iter` times and returns the last pass.
///
/// Each pass reduces the leading `count` rows of the moment matrix and draws
/// a fresh random combination; earlier passes are overwritten, not averaged.
/// `config.max_degree` is ignored.
///
/// # Errors
///
/// As [`extract_solutions_lasserre`]; the first failing pass aborts.
pub fn extract_solutions_lasserre_average<S, R>(
    mm: &S,
    ys: &[f64],
    config: &ExtractionConfig,
    rng: &mut R,
) -> Result<Solutions<VarOf<S>>, ExtractError>
where
    S: MomentSource + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    let m = mm.numeric_instance(ys, None)?;

    let rank = RankEstimate::new(&m, config.k_max, config.tol)?;
    rank.report(config.tol);

    let leading = m.rows(0, rank.count).into_owned();
    let mut sols = solve_from_rows(mm, &leading, m.nrows(), config, rng)?;
    for iteration in 1..config.num_iter {
        trace!(iteration, "lasserre pass");
        sols = solve_from_rows(mm, &leading, m.nrows(), config, rng)?;
    }

    Ok(sols)
}

/// Basis selection, multiplication matrices and Schur reading for rows
/// spanning the row space of the first `size` rows of the moment matrix.
fn solve_from_rows<S, R>(
    mm: &S,
    rows: &DMatrix<f64>,
    size: usize,
    config: &ExtractionConfig,
    rng: &mut R,
) -> Result<Solutions<VarOf<S>>, ExtractError>
where
    S: MomentSource + ?Sized,
    R: Rng + ?Sized,
{
    let row_monos = mm.row_monos();
    let selection = select_basis(rows, &row_monos[..size], &config.reduction)?;

    let index = monomial_index(row_monos);
    let operators = lasserre_operators(&selection.reduced, &selection.basis, mm.vars(), &index)?;
    let q = schur_vectors(&operators, rng)?;

    let columns = mm
        .vars()
        .iter()
        .zip(&operators)
        .map(|(var, n)| (var.clone(), quadratic_forms(n, &q)))
        .collect();
    Ok(Solutions::from_columns(columns))
}
