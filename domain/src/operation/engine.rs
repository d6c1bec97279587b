//! Single dispatch point from a request to the matrix operations.

use crate::core::error::MatrixError;
use crate::matrix::limits::MatrixLimits;
use crate::matrix::ops;
use crate::operation::kind::OperationKind;
use crate::operation::request::{Operands, OperationRequest, Outcome};

/// Run an operation.
///
/// Every operand is checked against `limits` before any arithmetic happens.
/// The request is only read; the outcome is always a newly built value.
pub fn apply(request: &OperationRequest, limits: &MatrixLimits) -> Result<Outcome, MatrixError> {
    for matrix in request.operands().matrices() {
        limits.check(matrix)?;
    }

    match (request.kind(), request.operands()) {
        (OperationKind::Add, Operands::Binary(a, b)) => ops::add(a, b).map(Outcome::Matrix),
        (OperationKind::Subtract, Operands::Binary(a, b)) => {
            ops::subtract(a, b).map(Outcome::Matrix)
        }
        (OperationKind::Multiply, Operands::Binary(a, b)) => {
            ops::multiply(a, b).map(Outcome::Matrix)
        }
        (OperationKind::Determinant, Operands::Unary(a)) => {
            ops::determinant(a).map(Outcome::Scalar)
        }
        (OperationKind::Transpose, Operands::Unary(a)) => Ok(Outcome::Matrix(ops::transpose(a))),
        (OperationKind::Power, Operands::WithExponent(a, n)) => {
            ops::power(a, *n).map(Outcome::Matrix)
        }
        (kind, _) => Err(MatrixError::InvalidRequest(format!(
            "operands do not match {}",
            kind
        ))),
    }
}
