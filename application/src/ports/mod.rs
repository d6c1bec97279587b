//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The conversation store port lives in the domain layer
//! ([`matrix_domain::ConversationRepository`]).

pub mod conversation_logger;
