//! Interactive chat module
//!
//! Provides a readline-based chat interface over [`HandleMessageUseCase`](matrix_application::HandleMessageUseCase).

mod repl;
mod session;

pub use repl::ChatRepl;
pub use session::{ChatSession, LineOutcome};
