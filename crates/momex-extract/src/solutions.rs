//! Extracted solutions.

/// Solution coordinates per variable.
///
/// Position `j` of every variable's sequence together forms solution point
/// `j`. All sequences have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Solutions<V> {
    vars: Vec<V>,
    values: Vec<Vec<f64>>,
}

impl<V: PartialEq> Solutions<V> {
    /// Builds the mapping from `(variable, values)` columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns have different lengths.
    pub(crate) fn from_columns(columns: Vec<(V, Vec<f64>)>) -> Self {
        let (vars, values): (Vec<V>, Vec<Vec<f64>>) = columns.into_iter().unzip();
        assert!(
            values.windows(2).all(|w| w[0].len() == w[1].len()),
            "solution sequences must have equal length"
        );
        Self { vars, values }
    }

    /// Number of recovered solutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Returns true if nothing was recovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The variables, in extraction order.
    #[must_use]
    pub fn vars(&self) -> &[V] {
        &self.vars
    }

    /// Values of `var` across all solutions.
    #[must_use]
    pub fn get(&self, var: &V) -> Option<&[f64]> {
        self.vars
            .iter()
            .position(|v| v == var)
            .map(|i| self.values[i].as_slice())
    }

    /// Iterates over `(variable, values)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[f64])> {
        self.vars
            .iter()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Coordinates of solution `j`, ordered like [`Self::vars`].
    #[must_use]
    pub fn point(&self, j: usize) -> Option<Vec<f64>> {
        (j < self.len()).then(|| self.values.iter().map(|col| col[j]).collect())
    }

    /// Iterates over solution points.
    pub fn points(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.len()).map(|j| self.values.iter().map(|col| col[j]).collect())
    }
}
