//! Rank-revealing basis selection.
//!
//! The numerical rank of the moment matrix is read off its singular values;
//! the basis monomials are the pivot columns of a stabilized row reduction
//! of a rank-sized set of rows spanning the row space.

use nalgebra::DMatrix;
use tracing::{debug, warn};

use momex_linalg::{
    leading_columns, row_normalize_leading_one, sorted_svd, srref, ReductionConfig, SortedSvd,
};
use momex_poly::Monomial;

use crate::error::ExtractError;

/// Singular value decomposition of the moment matrix with its truncation
/// point.
#[derive(Clone, Debug)]
pub struct RankEstimate {
    /// The decomposition, singular values descending.
    pub svd: SortedSvd,
    /// `min(k_max, #{σ > tol})`.
    pub count: usize,
}

impl RankEstimate {
    /// Decomposes `m` and truncates at `min(k_max, #{σ > tol})`.
    ///
    /// # Errors
    ///
    /// Fails when the count is zero or when it leaves no singular value to
    /// discard.
    pub fn new(m: &DMatrix<f64>, k_max: usize, tol: f64) -> Result<Self, ExtractError> {
        let svd = sorted_svd(m)?;
        let count = k_max.min(svd.count_above(tol));
        let available = svd.singular_values.len();

        if count == 0 {
            return Err(ExtractError::RankDeficient { tol });
        }
        if count >= available {
            return Err(ExtractError::RankExhausted { count, available });
        }

        debug!(count, available, "rank estimate");
        Ok(Self { svd, count })
    }

    /// The largest singular value dropped by the truncation.
    #[must_use]
    pub fn discarded(&self) -> f64 {
        self.svd.singular_values[self.count]
    }

    /// The top `count` right singular vectors, as rows.
    #[must_use]
    pub fn row_space(&self) -> DMatrix<f64> {
        self.svd.v_t.rows(0, self.count).into_owned()
    }

    /// The top `count` left singular vectors, as columns.
    #[must_use]
    pub fn column_space(&self) -> DMatrix<f64> {
        self.svd.u.columns(0, self.count).into_owned()
    }

    /// Reports a truncation that dropped a significant singular value.
    pub fn report(&self, tol: f64) {
        let lost = self.discarded();
        if lost > tol {
            warn!(lost, tol, count = self.count, "truncation discards a singular value above tolerance");
        } else {
            debug!(lost, "discarded singular value");
        }
    }
}

/// Basis monomials and the reduced matrix they were read from.
#[derive(Clone, Debug)]
pub struct BasisSelection<M> {
    /// Reduced rows, each with a leading one at its pivot column.
    pub reduced: DMatrix<f64>,
    /// Pivot column of each reduced row.
    pub pivots: Vec<usize>,
    /// `row_monos[pivot]` for each pivot.
    pub basis: Vec<M>,
}

/// Selects basis monomials from rows spanning the row space.
///
/// # Errors
///
/// Returns [`ExtractError::NoPivot`] if a reduced row has no entry above the
/// pivot threshold, and [`ExtractError::PivotOutOfRange`] if a pivot does not
/// index a row monomial.
pub fn select_basis<M: Monomial>(
    rows: &DMatrix<f64>,
    row_monos: &[M],
    config: &ReductionConfig,
) -> Result<BasisSelection<M>, ExtractError> {
    let reduced = srref(rows, config).reduced;
    let reduced = row_normalize_leading_one(&reduced, config.zero_tol);

    let pivots = leading_columns(&reduced, config.pivot_threshold)
        .into_iter()
        .enumerate()
        .map(|(row, lead)| {
            lead.ok_or(ExtractError::NoPivot {
                row,
                threshold: config.pivot_threshold,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let basis = pivots
        .iter()
        .map(|&index| {
            row_monos
                .get(index)
                .cloned()
                .ok_or(ExtractError::PivotOutOfRange {
                    index,
                    len: row_monos.len(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(?basis, "selected basis monomials");
    Ok(BasisSelection {
        reduced,
        pivots,
        basis,
    })
}
