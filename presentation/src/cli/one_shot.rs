//! Building a request from one-shot command-line input.

use matrix_domain::{
    MatrixError, MatrixLimits, OperationKind, OperationRequest, SecondOperand, parse_exponent,
    parse_matrix_with_limits,
};

/// Raw operand text gathered from files, stdin and flags.
#[derive(Debug, Clone, Default)]
pub struct OneShotInput {
    pub first: String,
    pub second: Option<String>,
    pub exponent: Option<String>,
}

impl OneShotInput {
    /// Parse the operands and pair them with `operation`.
    ///
    /// Missing or superfluous operands are reported as
    /// [`MatrixError::InvalidRequest`] naming the flag involved.
    pub fn into_request(
        self,
        operation: OperationKind,
        limits: &MatrixLimits,
    ) -> Result<OperationRequest, MatrixError> {
        let first = parse_matrix_with_limits(&self.first, limits)?;

        match operation.second_operand() {
            SecondOperand::None => {
                reject_extra(operation, self.second.is_some(), "--second")?;
                reject_extra(operation, self.exponent.is_some(), "--exponent")?;
                OperationRequest::unary(operation, first)
            }
            SecondOperand::Matrix => {
                reject_extra(operation, self.exponent.is_some(), "--exponent")?;
                let text = self.second.ok_or_else(|| missing(operation, "--second"))?;
                let second = parse_matrix_with_limits(&text, limits)?;
                OperationRequest::binary(operation, first, second)
            }
            SecondOperand::Exponent => {
                reject_extra(operation, self.second.is_some(), "--second")?;
                let text = self.exponent.ok_or_else(|| missing(operation, "--exponent"))?;
                Ok(OperationRequest::power(first, parse_exponent(&text)?))
            }
        }
    }
}

fn missing(operation: OperationKind, flag: &str) -> MatrixError {
    MatrixError::InvalidRequest(format!("{} needs {}", operation, flag))
}

fn reject_extra(operation: OperationKind, present: bool, flag: &str) -> Result<(), MatrixError> {
    if present {
        return Err(MatrixError::InvalidRequest(format!(
            "{} does not take {}",
            operation, flag
        )));
    }
    Ok(())
}
