//! Conversation session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Seconds a half-finished conversation is kept; 0 keeps it forever
    pub idle_timeout_seconds: u64,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_seconds: 900,
        }
    }
}

impl FileSessionConfig {
    pub fn idle_timeout(&self) -> Option<Duration> {
        match self.idle_timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
