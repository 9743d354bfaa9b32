//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the JSON store file.
    pub data_file: PathBuf,
    /// When set, state lives in memory only and dies with the process.
    pub ephemeral: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_file: env::var("RIPPLE_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ripple.json")),
            ephemeral: env::var("RIPPLE_EPHEMERAL")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
