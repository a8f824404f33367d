//! Tuning parameters shared by the extractors.

use momex_linalg::ReductionConfig;

use crate::error::ExtractError;

/// Configuration for solution extraction.
#[derive(Clone, Debug)]
pub struct ExtractionConfig {
    /// Upper bound on the extracted rank.
    pub k_max: usize,
    /// Singular values at or below this are truncated.
    pub tol: f64,
    /// Number of passes of the averaging variant.
    pub num_iter: usize,
    /// Extract from the leading block of rows up to this degree
    /// (single-pass Lasserre only).
    pub max_degree: Option<u32>,
    /// Row reduction tolerances and the leading-one threshold.
    pub reduction: ReductionConfig,
    /// Denominators at or below this magnitude are rejected by the joint
    /// nullspace reader.
    pub denominator_tol: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            k_max: 10,
            tol: 1e-6,
            num_iter: 10,
            max_degree: None,
            reduction: ReductionConfig::default(),
            denominator_tol: 1e-12,
        }
    }
}

impl ExtractionConfig {
    /// Defaults for the nullspace (Dreesen) extractors.
    #[must_use]
    pub fn dreesen() -> Self {
        Self {
            tol: 1e-5,
            ..Self::default()
        }
    }

    /// Sets the rank cap.
    #[must_use]
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    /// Sets the singular value tolerance.
    #[must_use]
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the number of passes of the averaging variant.
    #[must_use]
    pub fn with_num_iter(mut self, num_iter: usize) -> Self {
        self.num_iter = num_iter;
        self
    }

    /// Restricts single-pass Lasserre extraction to rows up to `degree`.
    #[must_use]
    pub fn with_max_degree(mut self, degree: u32) -> Self {
        self.max_degree = Some(degree);
        self
    }

    /// Checks that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.k_max == 0 {
            return Err(ExtractError::InvalidParameter("k_max must be positive".into()));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(ExtractError::InvalidParameter(format!(
                "tol must be positive and finite, got {}",
                self.tol
            )));
        }
        if self.num_iter == 0 {
            return Err(ExtractError::InvalidParameter("num_iter must be positive".into()));
        }
        Ok(())
    }
}
