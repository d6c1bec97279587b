//! Domain error types

use crate::core::shape::{Shape, ShapeRequirement};
use crate::operation::kind::OperationKind;
use thiserror::Error;

/// Why a piece of text could not be read as a matrix or exponent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("input contains no rows")]
    Empty,

    #[error("line {line}: '{token}' is not a real number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line} is blank; rows must be consecutive")]
    BlankLine { line: usize },

    #[error("line {line} has {found} values, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("'{input}' is not an integer exponent")]
    InvalidExponent { input: String },
}

/// Errors raised by the matrix core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Shape error: {operation} needs {expected}, got {actual}")]
    Shape {
        operation: OperationKind,
        expected: ShapeRequirement,
        actual: Shape,
    },

    #[error("Numeric error: {operation}: {reason}")]
    Numeric {
        operation: OperationKind,
        reason: String,
    },

    #[error("Limit error: {rows}x{cols} exceeds the maximum dimension of {max_dimension}")]
    Limit {
        rows: usize,
        cols: usize,
        max_dimension: usize,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl MatrixError {
    /// Check if this error was caused by unreadable input text
    pub fn is_parse(&self) -> bool {
        matches!(self, MatrixError::Parse(_))
    }

    /// Short machine-readable category name
    pub fn category(&self) -> &'static str {
        match self {
            MatrixError::Parse(_) => "parse",
            MatrixError::Shape { .. } => "shape",
            MatrixError::Numeric { .. } => "numeric",
            MatrixError::Limit { .. } => "limit",
            MatrixError::InvalidRequest(_) => "request",
        }
    }

    pub(crate) fn shape(
        operation: OperationKind,
        expected: ShapeRequirement,
        actual: Shape,
    ) -> Self {
        MatrixError::Shape {
            operation,
            expected,
            actual,
        }
    }

    pub(crate) fn numeric(operation: OperationKind, reason: impl Into<String>) -> Self {
        MatrixError::Numeric {
            operation,
            reason: reason.into(),
        }
    }
}
