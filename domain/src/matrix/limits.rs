//! Size limits applied before any computation.

use crate::core::error::MatrixError;
use crate::matrix::entities::Matrix;
use serde::{Deserialize, Serialize};

/// Upper bound on matrix dimensions accepted by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixLimits {
    /// Largest allowed row or column count
    pub max_dimension: usize,
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self { max_dimension: 100 }
    }
}

impl MatrixLimits {
    pub fn new(max_dimension: usize) -> Self {
        Self { max_dimension }
    }

    /// No effective cap
    pub fn unbounded() -> Self {
        Self {
            max_dimension: usize::MAX,
        }
    }

    pub fn check_dims(&self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows > self.max_dimension || cols > self.max_dimension {
            return Err(MatrixError::Limit {
                rows,
                cols,
                max_dimension: self.max_dimension,
            });
        }
        Ok(())
    }

    pub fn check(&self, matrix: &Matrix) -> Result<(), MatrixError> {
        self.check_dims(matrix.nrows(), matrix.ncols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap() {
        let limits = MatrixLimits::default();
        assert!(limits.check_dims(100, 100).is_ok());
        assert!(limits.check_dims(101, 1).is_err());
        assert!(limits.check_dims(1, 101).is_err());
    }

    #[test]
    fn test_limit_error_context() {
        let limits = MatrixLimits::new(2);
        let err = limits.check(&Matrix::identity(3).unwrap()).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Limit {
                rows: 3,
                cols: 3,
                max_dimension: 2
            }
        );
    }

    #[test]
    fn test_unbounded() {
        assert!(MatrixLimits::unbounded().check_dims(10_000, 10_000).is_ok());
    }
}
