//! Matrix entity

use crate::core::error::MatrixError;
use crate::core::shape::Shape;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A rectangular grid of real numbers (Value Object)
///
/// Stored row-major. Every constructor validates that the matrix has at
/// least one row and one column and that all rows have the same length,
/// so any `Matrix` value is rectangular and non-empty. There are no
/// mutating methods: operations build new matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a flat row-major buffer
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidRequest(format!(
                "matrix must have at least one row and one column, got {}x{}",
                rows, cols
            )));
        }
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidRequest(format!(
                "buffer of length {} does not fit a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from nested rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != n_cols)
        {
            return Err(MatrixError::InvalidRequest(format!(
                "row {} has {} values, expected {}",
                index + 1,
                row.len(),
                n_cols
            )));
        }
        let data = rows.into_iter().flatten().collect();
        Self::from_vec(n_rows, n_cols, data)
    }

    /// The `n`x`n` identity matrix; `n` must be positive
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_vec(n, n, data)
    }

    /// Used by operations whose output shape is already known to be valid.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { rows, cols, data }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(<[f64]>::to_vec).collect()
    }

    /// True if every element is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Elementwise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for {} matrix",
            index,
            self.shape()
        );
        &self.data[index.0 * self.cols + index.1]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}
