//! Configuration file loading for matrix-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MATRIX_CHAT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./matrix-chat.toml` or `./.matrix-chat.toml`
//! 4. Global: `$XDG_CONFIG_HOME/matrix-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileEngineConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
