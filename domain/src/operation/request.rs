//! Operation request and outcome value objects

use crate::core::error::MatrixError;
use crate::matrix::entities::Matrix;
use crate::matrix::format::{format_matrix, format_scalar};
use crate::operation::kind::{OperationKind, SecondOperand};
use serde::{Deserialize, Serialize};

/// Inputs of an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operands {
    Unary(Matrix),
    Binary(Matrix, Matrix),
    WithExponent(Matrix, i64),
}

impl Operands {
    fn second_operand(&self) -> SecondOperand {
        match self {
            Operands::Unary(_) => SecondOperand::None,
            Operands::Binary(..) => SecondOperand::Matrix,
            Operands::WithExponent(..) => SecondOperand::Exponent,
        }
    }

    /// All matrices carried by these operands
    pub fn matrices(&self) -> Vec<&Matrix> {
        match self {
            Operands::Unary(a) | Operands::WithExponent(a, _) => vec![a],
            Operands::Binary(a, b) => vec![a, b],
        }
    }
}

/// A fully collected operation, ready for the engine (Value Object)
///
/// The operand form always matches what the operation expects: a request
/// for `add` can only be built with two matrices, `power` with a matrix and
/// an exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    kind: OperationKind,
    operands: Operands,
}

impl OperationRequest {
    pub fn new(kind: OperationKind, operands: Operands) -> Result<Self, MatrixError> {
        if kind.second_operand() != operands.second_operand() {
            return Err(MatrixError::InvalidRequest(format!(
                "{} does not take {:?} operands",
                kind,
                operands.second_operand()
            )));
        }
        Ok(Self { kind, operands })
    }

    pub fn unary(kind: OperationKind, matrix: Matrix) -> Result<Self, MatrixError> {
        Self::new(kind, Operands::Unary(matrix))
    }

    pub fn binary(kind: OperationKind, left: Matrix, right: Matrix) -> Result<Self, MatrixError> {
        Self::new(kind, Operands::Binary(left, right))
    }

    pub fn power(matrix: Matrix, exponent: i64) -> Self {
        Self {
            kind: OperationKind::Power,
            operands: Operands::WithExponent(matrix, exponent),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }
}

/// Successful result of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

impl Outcome {
    /// Render with `precision` fractional digits
    pub fn render(&self, precision: usize) -> String {
        match self {
            Outcome::Matrix(m) => format_matrix(m, precision),
            Outcome::Scalar(v) => format_scalar(*v, precision),
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Outcome::Matrix(m) => Some(m),
            Outcome::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Scalar(v) => Some(*v),
            Outcome::Matrix(_) => None,
        }
    }
}
