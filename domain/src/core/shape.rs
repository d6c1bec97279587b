//! Shape value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimensions of a matrix (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Shape of the transposed matrix
    pub fn transposed(&self) -> Self {
        Self::new(self.cols, self.rows)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// What an operation needed from an operand's shape.
///
/// Carried by shape errors so the caller can explain the mismatch
/// without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeRequirement {
    /// Operand must have exactly this shape (addition, subtraction)
    SameAs(Shape),
    /// Right operand must have this many rows (multiplication)
    Rows(usize),
    /// Operand must be square (determinant, power)
    Square,
}

impl fmt::Display for ShapeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeRequirement::SameAs(shape) => write!(f, "a {} matrix", shape),
            ShapeRequirement::Rows(rows) => write!(f, "a matrix with {} rows", rows),
            ShapeRequirement::Square => write!(f, "a square matrix"),
        }
    }
}
