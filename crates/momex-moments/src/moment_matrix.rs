//! Moment matrices indexed by monomials.
//!
//! A moment matrix of degree `d` has one row and one column per monomial of
//! total degree at most `d`; entry `(i, j)` is the moment of the product of
//! the row and column monomials. The moment vector `ys` assigns one value to
//! every monomial of degree at most `2d`, in the matrix's monomial order.

use nalgebra::DMatrix;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use momex_poly::{monomials_up_to_degree, Monomial, MonomialOrder, PackedMonomial, Variable, MAX_VARS};

use crate::error::MomentError;

/// The structure a solution extractor reads from a moment matrix.
pub trait MomentSource {
    /// Monomial type indexing rows and columns.
    type Mono: Monomial;

    /// The problem variables, in order.
    fn vars(&self) -> &[<Self::Mono as Monomial>::Var];

    /// Monomials indexing the rows (and columns), in order.
    fn row_monos(&self) -> &[Self::Mono];

    /// Instantiates the numeric matrix for the moment values `ys`.
    ///
    /// With `max_degree`, only the leading block of rows and columns whose
    /// monomials have degree at most `max_degree` is returned, so row `i` of
    /// the result still corresponds to `row_monos()[i]`.
    ///
    /// # Errors
    ///
    /// Fails if `ys` does not match the matrix's monomial support, or if a
    /// degree restriction cannot be expressed as a leading block of rows.
    fn numeric_instance(
        &self,
        ys: &[f64],
        max_degree: Option<u32>,
    ) -> Result<DMatrix<f64>, MomentError>;
}

/// A symbolic moment matrix over [`PackedMonomial`]s.
#[derive(Clone, Debug)]
pub struct MomentMatrix {
    /// Half degree: rows are indexed by monomials up to this degree.
    degree: u32,
    /// Ordering of rows and of the moment vector.
    order: MonomialOrder,
    /// Problem variables.
    vars: Vec<Variable>,
    /// Row (and column) monomials.
    row_monos: Vec<PackedMonomial>,
    /// Every monomial appearing as an entry, i.e. up to degree `2 * degree`.
    monos: Vec<PackedMonomial>,
    /// Inverse map: monomial -> position in `monos`.
    mono_to_index: FxHashMap<PackedMonomial, usize>,
    /// Row-major entry table: position in `monos` of `row_i * row_j`.
    entries: Vec<usize>,
}

impl MomentMatrix {
    /// Builds the moment matrix of the given degree in `num_vars` variables.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::UnsupportedVariables`] for zero variables or
    /// more than the packed representation holds.
    pub fn new(num_vars: usize, degree: u32, order: MonomialOrder) -> Result<Self, MomentError> {
        if num_vars == 0 || num_vars > MAX_VARS {
            return Err(MomentError::UnsupportedVariables(num_vars));
        }

        let row_monos = monomials_up_to_degree(num_vars, degree, order);
        let monos = monomials_up_to_degree(num_vars, 2 * degree, order);

        let mono_to_index: FxHashMap<PackedMonomial, usize> =
            monos.iter().enumerate().map(|(i, m)| (*m, i)).collect();

        // Every product of two row monomials lies in the degree-2d support
        let entries: Vec<usize> = row_monos
            .par_iter()
            .flat_map_iter(|a| {
                row_monos
                    .iter()
                    .map(|b| mono_to_index[&a.mul(b)])
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(Self {
            degree,
            order,
            vars: (0..num_vars).map(Variable).collect(),
            row_monos,
            monos,
            mono_to_index,
            entries,
        })
    }

    /// Returns the half degree of the matrix.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Returns the monomials the moment vector is indexed by.
    #[must_use]
    pub fn monos(&self) -> &[PackedMonomial] {
        &self.monos
    }

    /// Returns the position of `m` in the moment vector.
    #[must_use]
    pub fn index_of(&self, m: &PackedMonomial) -> Option<usize> {
        self.mono_to_index.get(m).copied()
    }

    /// Moments of a finite atomic measure `Σ wₖ δ(pₖ)`.
    ///
    /// The result is a valid `ys` for [`MomentSource::numeric_instance`].
    #[must_use]
    pub fn moments_of_atoms(&self, atoms: &[(f64, Vec<f64>)]) -> Vec<f64> {
        self.monos
            .iter()
            .map(|m| atoms.iter().map(|(w, p)| w * m.eval(p)).sum())
            .collect()
    }

    /// Number of leading rows with degree at most `max_degree`.
    ///
    /// Only graded orders list the low-degree rows first; under a
    /// non-graded order a restriction below the full degree is rejected.
    fn leading_block(&self, max_degree: Option<u32>) -> Result<usize, MomentError> {
        match max_degree {
            Some(d) if d < self.degree => {
                if !self.order.is_graded() {
                    return Err(MomentError::UnsupportedOrder {
                        order: self.order,
                        max_degree: d,
                    });
                }
                Ok(self
                    .row_monos
                    .iter()
                    .take_while(|m| m.total_degree() <= d)
                    .count())
            }
            _ => Ok(self.row_monos.len()),
        }
    }
}

impl MomentSource for MomentMatrix {
    type Mono = PackedMonomial;

    fn vars(&self) -> &[Variable] {
        &self.vars
    }

    fn row_monos(&self) -> &[PackedMonomial] {
        &self.row_monos
    }

    fn numeric_instance(
        &self,
        ys: &[f64],
        max_degree: Option<u32>,
    ) -> Result<DMatrix<f64>, MomentError> {
        if ys.len() != self.monos.len() {
            return Err(MomentError::LengthMismatch {
                expected: self.monos.len(),
                found: ys.len(),
            });
        }

        let n = self.row_monos.len();
        let size = self.leading_block(max_degree)?;
        Ok(DMatrix::from_fn(size, size, |i, j| ys[self.entries[i * n + j]]))
    }
}
