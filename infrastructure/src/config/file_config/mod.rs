//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod engine;
mod logging;
mod output;
mod repl;
mod session;

pub use engine::FileEngineConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use matrix_application::EngineParams;
use matrix_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Precision and size limits
    pub engine: FileEngineConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation lifetime
    pub session: FileSessionConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.engine.to_engine_params().1
    }

    /// Engine parameters with invalid values replaced by safe ones.
    pub fn engine_params(&self) -> EngineParams {
        self.engine.to_engine_params().0
    }
}
