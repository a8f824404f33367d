//! Multiplication operators.
//!
//! Two representations of "multiply by a variable":
//! - Lasserre: square matrices over the selected basis, read from the
//!   columns of the reduced row space
//! - Dreesen: 0/1 shift-selection pairs over the full row index, projected
//!   onto the column space as a pencil `(Sg·Z, S1·Z)`

use nalgebra::DMatrix;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use momex_poly::Monomial;

use crate::error::ExtractError;

/// Maps each row monomial to its row index.
#[must_use]
pub fn monomial_index<M: Monomial>(row_monos: &[M]) -> FxHashMap<M, usize> {
    row_monos
        .iter()
        .enumerate()
        .map(|(i, m)| (m.clone(), i))
        .collect()
}

/// Builds one multiplication matrix per variable over `basis`.
///
/// Column `i` of the matrix for `var` is the column of `reduced` addressed by
/// `var * basis[i]`.
///
/// # Errors
///
/// Returns [`ExtractError::MissingShift`] if a shifted basis monomial is not
/// a row monomial or lies outside the columns of `reduced`.
pub fn lasserre_operators<M: Monomial>(
    reduced: &DMatrix<f64>,
    basis: &[M],
    vars: &[M::Var],
    index: &FxHashMap<M, usize>,
) -> Result<Vec<DMatrix<f64>>, ExtractError> {
    vars.iter()
        .map(|var| {
            let mut nvar = DMatrix::zeros(reduced.nrows(), basis.len());
            for (i, b) in basis.iter().enumerate() {
                let col = index
                    .get(&b.mul_var(var))
                    .copied()
                    .filter(|&col| col < reduced.ncols())
                    .ok_or_else(|| ExtractError::MissingShift {
                        var: format!("{var:?}"),
                        basis: format!("{b:?}"),
                    })?;
                nvar.set_column(i, &reduced.column(col));
            }
            Ok(nvar)
        })
        .collect()
}

/// Selection matrices pairing each monomial with its shift by a variable.
///
/// Row `r` of `s1` selects some row monomial `m`; row `r` of `sg` selects
/// `m * var`.
#[derive(Clone, Debug)]
pub struct ShiftSelection {
    /// Selects the unshifted monomials.
    pub s1: DMatrix<f64>,
    /// Selects the shifted monomials.
    pub sg: DMatrix<f64>,
}

impl ShiftSelection {
    /// Builds the selection for `var` over the row index.
    ///
    /// Only monomials whose shift is itself a row monomial contribute a row.
    #[must_use]
    pub fn new<M: Monomial>(row_monos: &[M], var: &M::Var, index: &FxHashMap<M, usize>) -> Self {
        let pairs: Vec<(usize, usize)> = row_monos
            .iter()
            .enumerate()
            .filter_map(|(i, m)| index.get(&m.mul_var(var)).map(|&g| (i, g)))
            .collect();

        let n = row_monos.len();
        let mut s1 = DMatrix::zeros(pairs.len(), n);
        let mut sg = DMatrix::zeros(pairs.len(), n);
        for (row, &(base, shifted)) in pairs.iter().enumerate() {
            s1[(row, base)] = 1.0;
            sg[(row, shifted)] = 1.0;
        }

        Self { s1, sg }
    }

    /// Stacks selections vertically, in order.
    #[must_use]
    pub fn stack(selections: &[Self], num_cols: usize) -> Self {
        let rows: usize = selections.iter().map(Self::rows).sum();
        let mut s1 = DMatrix::zeros(rows, num_cols);
        let mut sg = DMatrix::zeros(rows, num_cols);

        let mut r = 0;
        for sel in selections {
            let n = sel.rows();
            s1.view_mut((r, 0), (n, num_cols)).copy_from(&sel.s1);
            sg.view_mut((r, 0), (n, num_cols)).copy_from(&sel.sg);
            r += n;
        }

        Self { s1, sg }
    }

    /// Number of shift pairs.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.s1.nrows()
    }

    /// The pencil `(A, B) = (Sg·Z, S1·Z)`.
    #[must_use]
    pub fn project(&self, z: &DMatrix<f64>) -> (DMatrix<f64>, DMatrix<f64>) {
        (&self.sg * z, &self.s1 * z)
    }
}

/// Builds the shift selection of every variable.
///
/// Variables are independent, so they are processed in parallel.
#[must_use]
pub fn shift_selections<M: Monomial>(
    row_monos: &[M],
    vars: &[M::Var],
    index: &FxHashMap<M, usize>,
) -> Vec<ShiftSelection> {
    vars.par_iter()
        .map(|var| ShiftSelection::new(row_monos, var, index))
        .collect()
}
