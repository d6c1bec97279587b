//! Domain layer for matrix-chat
//!
//! This crate contains the matrix core and the conversation state that a
//! chat front-end drives. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Matrix core
//!
//! - **Parser**: free-form text → validated rectangular [`Matrix`]
//! - **Engine**: add, subtract, multiply, determinant, transpose and integer
//!   power, each checking shape preconditions before computing
//! - **Formatting**: [`Matrix`] → text with a fixed number of fractional digits
//!
//! ## Conversation
//!
//! A [`Conversation`] collects the operands for one operation over several
//! messages: select operation → first matrix → second matrix or exponent.

pub mod config;
pub mod conversation;
pub mod core;
pub mod matrix;
pub mod operation;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use conversation::{
    entities::{
        Conversation, ConversationError, ConversationId, ConversationState, Expecting, Step,
    },
    repository::ConversationRepository,
};
pub use core::{
    error::{MatrixError, ParseError},
    shape::{Shape, ShapeRequirement},
};
pub use matrix::{
    entities::Matrix,
    format::{DEFAULT_PRECISION, format_matrix, format_scalar},
    limits::MatrixLimits,
    ops::{add, determinant, multiply, power, subtract, transpose},
    parser::{parse_exponent, parse_matrix, parse_matrix_with_limits},
};
pub use operation::{
    engine::apply,
    kind::{OperationKind, SecondOperand},
    request::{Operands, OperationRequest, Outcome},
};
