//! Stabilized row reduction over `f64`.
//!
//! Gauss-Jordan elimination with partial (largest magnitude) pivoting. A
//! column whose remaining entries all fall below the zero tolerance is
//! treated as pivot-free, so nearly dependent rows reduce to zero rows
//! instead of amplifying noise.

use nalgebra::DMatrix;

/// Configuration for row reduction and pivot detection.
#[derive(Clone, Debug)]
pub struct ReductionConfig {
    /// Entries below `zero_tol * max|a_ij|` are treated as zero.
    pub zero_tol: f64,
    /// An entry must exceed this value to be accepted as a leading one.
    pub pivot_threshold: f64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            zero_tol: 1e-10,
            pivot_threshold: 0.9,
        }
    }
}

/// Result of [`srref`].
#[derive(Clone, Debug)]
pub struct Reduced {
    /// Row operations applied: `transform * input == reduced`.
    pub transform: DMatrix<f64>,
    /// The reduced row echelon form.
    pub reduced: DMatrix<f64>,
    /// Pivot column of each nonzero row, in row order.
    pub pivots: Vec<usize>,
}

impl Reduced {
    /// Returns the numerical rank found by the reduction.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// Stabilized reduced row echelon form.
///
/// Returns the transform, the reduced matrix and the pivot columns. Each
/// pivot entry is exactly one and every other entry of a pivot column is
/// exactly zero.
#[must_use]
pub fn srref(a: &DMatrix<f64>, config: &ReductionConfig) -> Reduced {
    let (num_rows, num_cols) = a.shape();
    let mut m = a.clone();
    let mut transform = DMatrix::identity(num_rows, num_rows);
    let tol = config.zero_tol * a.amax();
    let mut pivots = Vec::new();

    let mut pivot_row = 0;
    let mut pivot_col = 0;

    while pivot_row < num_rows && pivot_col < num_cols {
        // Largest magnitude at or below the pivot row
        let mut max_row = pivot_row;
        for row in pivot_row + 1..num_rows {
            if m[(row, pivot_col)].abs() > m[(max_row, pivot_col)].abs() {
                max_row = row;
            }
        }

        if m[(max_row, pivot_col)].abs() <= tol {
            for row in pivot_row..num_rows {
                m[(row, pivot_col)] = 0.0;
            }
            pivot_col += 1;
            continue;
        }

        if max_row != pivot_row {
            m.swap_rows(pivot_row, max_row);
            transform.swap_rows(pivot_row, max_row);
        }

        let inv = 1.0 / m[(pivot_row, pivot_col)];
        scale_row(&mut m, pivot_row, inv);
        scale_row(&mut transform, pivot_row, inv);
        m[(pivot_row, pivot_col)] = 1.0;

        // Eliminate above and below
        for row in 0..num_rows {
            if row == pivot_row {
                continue;
            }
            let factor = m[(row, pivot_col)];
            if factor != 0.0 {
                add_scaled_row(&mut m, row, pivot_row, -factor);
                add_scaled_row(&mut transform, row, pivot_row, -factor);
                m[(row, pivot_col)] = 0.0;
            }
        }

        pivots.push(pivot_col);
        pivot_row += 1;
        pivot_col += 1;
    }

    Reduced {
        transform,
        reduced: m,
        pivots,
    }
}

/// Scales each row so that its first entry above `zero_tol` in magnitude
/// becomes one. Rows with no such entry are copied unchanged.
#[must_use]
pub fn row_normalize_leading_one(a: &DMatrix<f64>, zero_tol: f64) -> DMatrix<f64> {
    let mut out = a.clone();
    for row in 0..out.nrows() {
        let lead = (0..out.ncols())
            .map(|col| out[(row, col)])
            .find(|v| v.abs() > zero_tol);
        if let Some(lead) = lead {
            scale_row(&mut out, row, 1.0 / lead);
        }
    }
    out
}

/// For each row, the lowest column index whose entry exceeds `threshold`.
#[must_use]
pub fn leading_columns(a: &DMatrix<f64>, threshold: f64) -> Vec<Option<usize>> {
    (0..a.nrows())
        .map(|row| (0..a.ncols()).find(|&col| a[(row, col)] > threshold))
        .collect()
}

/// Scales a row by a scalar in place.
fn scale_row(m: &mut DMatrix<f64>, row: usize, scale: f64) {
    for k in 0..m.ncols() {
        m[(row, k)] *= scale;
    }
}

/// Adds a scaled row to another: row[target] += scale * row[source].
fn add_scaled_row(m: &mut DMatrix<f64>, target: usize, source: usize, scale: f64) {
    for k in 0..m.ncols() {
        let val = m[(source, k)] * scale;
        m[(target, k)] += val;
    }
}
