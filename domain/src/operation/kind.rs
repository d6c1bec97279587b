//! Operation kind definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the operations the matrix core can perform.
///
/// The short tags (`add`, `mul`, `det`, ...) are what a chat front-end
/// sends when the user presses an operation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Subtract,
    #[serde(rename = "mul")]
    Multiply,
    #[serde(rename = "det")]
    Determinant,
    #[serde(rename = "trans")]
    Transpose,
    #[serde(rename = "power")]
    Power,
}

/// What an operation needs after its first matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondOperand {
    /// Unary operation, computed right after the first matrix
    None,
    /// A second matrix
    Matrix,
    /// A signed integer exponent
    Exponent,
}

impl OperationKind {
    /// All operations in menu order
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Determinant,
        OperationKind::Transpose,
        OperationKind::Power,
    ];

    /// Short tag used in commands and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "sub",
            OperationKind::Multiply => "mul",
            OperationKind::Determinant => "det",
            OperationKind::Transpose => "trans",
            OperationKind::Power => "power",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OperationKind::Add => "addition",
            OperationKind::Subtract => "subtraction",
            OperationKind::Multiply => "multiplication",
            OperationKind::Determinant => "determinant",
            OperationKind::Transpose => "transpose",
            OperationKind::Power => "power",
        }
    }

    pub fn second_operand(&self) -> SecondOperand {
        match self {
            OperationKind::Add | OperationKind::Subtract | OperationKind::Multiply => {
                SecondOperand::Matrix
            }
            OperationKind::Determinant | OperationKind::Transpose => SecondOperand::None,
            OperationKind::Power => SecondOperand::Exponent,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.second_operand() == SecondOperand::None
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "addition" | "sum" | "+" => Ok(OperationKind::Add),
            "sub" | "subtract" | "subtraction" | "-" => Ok(OperationKind::Subtract),
            "mul" | "multiply" | "multiplication" | "*" => Ok(OperationKind::Multiply),
            "det" | "determinant" => Ok(OperationKind::Determinant),
            "trans" | "transpose" | "t" => Ok(OperationKind::Transpose),
            "power" | "pow" | "^" => Ok(OperationKind::Power),
            _ => Err(format!("Invalid operation: {}", s)),
        }
    }
}
