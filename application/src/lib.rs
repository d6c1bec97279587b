//! Application layer for matrix-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EngineParams, MAX_PRECISION};
pub use ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
pub use use_cases::compute::{ComputeOutput, ComputeUseCase};
pub use use_cases::handle_message::{HandleMessageUseCase, Reply};
