//! Conversation domain entities

use crate::core::error::MatrixError;
use crate::matrix::entities::Matrix;
use crate::matrix::limits::MatrixLimits;
use crate::matrix::parser::{parse_exponent, parse_matrix_with_limits};
use crate::operation::kind::{OperationKind, SecondOperand};
use crate::operation::request::OperationRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifies one conversation (one chat, one terminal session)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        ConversationId::new(s)
    }
}

/// Where a conversation is in the select → first input → second input flow
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConversationState {
    /// No operation chosen yet
    #[default]
    Idle,
    /// Operation chosen, waiting for the first matrix
    AwaitingFirst { operation: OperationKind },
    /// First matrix stored, waiting for a second matrix or an exponent
    AwaitingSecond {
        operation: OperationKind,
        first: Matrix,
    },
}

/// Errors that keep a conversation where it is
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversationError {
    #[error("No operation selected")]
    NoOperation,

    #[error(transparent)]
    Input(#[from] MatrixError),
}

/// Result of feeding one message into a conversation
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// First matrix accepted; the operation needs another input
    NeedSecond(SecondOperand),
    /// All operands collected; the conversation is back to idle
    Ready(OperationRequest),
}

/// One user's in-progress operation (Entity)
///
/// Owns all per-conversation state. A failed input leaves the state as it
/// was, so the same input can simply be sent again.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: ConversationId,
    state: ConversationState,
}

impl Conversation {
    pub fn new(id: impl Into<ConversationId>) -> Self {
        Self {
            id: id.into(),
            state: ConversationState::Idle,
        }
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ConversationState::Idle)
    }

    /// Operation currently being collected, if any
    pub fn operation(&self) -> Option<OperationKind> {
        match &self.state {
            ConversationState::Idle => None,
            ConversationState::AwaitingFirst { operation }
            | ConversationState::AwaitingSecond { operation, .. } => Some(*operation),
        }
    }

    /// What the next message is expected to contain
    pub fn expecting(&self) -> Option<Expecting> {
        match &self.state {
            ConversationState::Idle => None,
            ConversationState::AwaitingFirst { .. } => Some(Expecting::FirstMatrix),
            ConversationState::AwaitingSecond { operation, .. } => {
                match operation.second_operand() {
                    SecondOperand::Exponent => Some(Expecting::Exponent),
                    _ => Some(Expecting::SecondMatrix),
                }
            }
        }
    }

    /// Start (or restart) collecting operands for `operation`.
    pub fn select(&mut self, operation: OperationKind) {
        self.state = ConversationState::AwaitingFirst { operation };
    }

    /// Drop any partially collected operation.
    pub fn cancel(&mut self) {
        self.state = ConversationState::Idle;
    }

    /// Feed one message of user text.
    pub fn submit(&mut self, text: &str, limits: &MatrixLimits) -> Result<Step, ConversationError> {
        match &self.state {
            ConversationState::Idle => Err(ConversationError::NoOperation),
            ConversationState::AwaitingFirst { operation } => {
                let operation = *operation;
                let first = parse_matrix_with_limits(text, limits)?;
                match operation.second_operand() {
                    SecondOperand::None => {
                        let request = OperationRequest::unary(operation, first)?;
                        self.state = ConversationState::Idle;
                        Ok(Step::Ready(request))
                    }
                    second => {
                        self.state = ConversationState::AwaitingSecond { operation, first };
                        Ok(Step::NeedSecond(second))
                    }
                }
            }
            ConversationState::AwaitingSecond { operation, first } => {
                let request = match operation.second_operand() {
                    SecondOperand::Exponent => {
                        OperationRequest::power(first.clone(), parse_exponent(text)?)
                    }
                    _ => {
                        let second = parse_matrix_with_limits(text, limits)?;
                        OperationRequest::binary(*operation, first.clone(), second)?
                    }
                };
                self.state = ConversationState::Idle;
                Ok(Step::Ready(request))
            }
        }
    }

    /// Put a completed request's operands back so its last input can be
    /// retried, e.g. after the engine rejected the combination.
    pub fn resume_after_failure(&mut self, request: &OperationRequest) {
        use crate::operation::request::Operands;

        let operation = request.kind();
        self.state = match request.operands() {
            Operands::Unary(_) => ConversationState::AwaitingFirst { operation },
            Operands::Binary(first, _) | Operands::WithExponent(first, _) => {
                ConversationState::AwaitingSecond {
                    operation,
                    first: first.clone(),
                }
            }
        };
    }
}

/// The input a conversation is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expecting {
    FirstMatrix,
    SecondMatrix,
    Exponent,
}
