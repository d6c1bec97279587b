//! Presentation layer for matrix-chat
//!
//! This crate contains CLI definitions, output formatters and the
//! interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, ChatSession, LineOutcome};
pub use cli::commands::{Cli, OperationArg, OutputFormatArg};
pub use cli::one_shot::OneShotInput;
pub use output::console::ConsoleFormatter;
