//! Engine configuration from TOML (`[engine]` section)

use matrix_application::{EngineParams, MAX_PRECISION};
use matrix_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_PRECISION, MatrixLimits, Severity};
use serde::{Deserialize, Serialize};

/// Raw engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Fractional digits in rendered results
    pub precision: usize,
    /// Largest accepted row or column count
    pub max_dimension: usize,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_dimension: MatrixLimits::default().max_dimension,
        }
    }
}

impl FileEngineConfig {
    /// Convert to [`EngineParams`], returning any issues found.
    ///
    /// Precision above [`MAX_PRECISION`] is clamped with a warning.
    /// A zero `max_dimension` would reject every matrix and is an error;
    /// the default cap is used instead.
    pub fn to_engine_params(&self) -> (EngineParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.precision > MAX_PRECISION {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "engine.precision".to_string(),
                    value: self.precision.to_string(),
                },
                message: format!(
                    "engine.precision: {} is above {}, clamping",
                    self.precision, MAX_PRECISION
                ),
            });
        }

        let max_dimension = if self.max_dimension == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "engine.max_dimension".to_string(),
                    value: "0".to_string(),
                },
                message: "engine.max_dimension must be at least 1".to_string(),
            });
            MatrixLimits::default().max_dimension
        } else {
            self.max_dimension
        };

        let params = EngineParams::default()
            .with_precision(self.precision)
            .with_max_dimension(max_dimension);
        (params, issues)
    }
}
