//! Engine parameters: how results are computed and rendered.
//!
//! [`EngineParams`] groups the static parameters the use cases pass to the
//! matrix core. These are application-layer concerns, not domain policy.

use matrix_domain::{DEFAULT_PRECISION, MatrixLimits};
use serde::{Deserialize, Serialize};

/// Largest precision accepted; beyond this `f64` has no meaningful digits.
pub const MAX_PRECISION: usize = 15;

/// Parameters for computing and rendering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Fractional digits in rendered results.
    pub precision: usize,
    /// Dimension cap applied to every operand.
    pub limits: MatrixLimits,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            limits: MatrixLimits::default(),
        }
    }
}

impl EngineParams {
    // ==================== Builder Methods ====================

    /// Set the precision, clamped to [`MAX_PRECISION`].
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.limits = MatrixLimits::new(max_dimension);
        self
    }
}
