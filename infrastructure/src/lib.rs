//! Infrastructure layer for matrix-chat
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers, including configuration file loading.

pub mod config;
pub mod conversation;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEngineConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileSessionConfig,
};
pub use conversation::InMemoryConversationRepository;
pub use logging::JsonlConversationLogger;
