use std::path::PathBuf;
use thiserror::Error;

use crate::types::Format;

#[derive(Debug, Error)]
pub enum DbswitchError {
    #[error(
        "No database config found in {} (looked for .dbconfig.json, .dbconfig.yaml, .dbconfig.yml, .dbconfig.ini)",
        .dir.display()
    )]
    ConfigNotFound { dir: PathBuf },

    #[error("Config file not found at {} (set via DBCONFIG_FILE)", .path.display())]
    OverrideNotFound { path: PathBuf },

    #[error("Unsupported config format: {} (expected .json, .yaml, .yml or .ini)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse {} as {format}: {reason}", .path.display())]
    ParseError {
        path: PathBuf,
        format: Format,
        reason: String,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown client '{key}' (available: {})", .available.join(", "))]
    UnknownClient {
        key: String,
        available: Vec<String>,
    },

    #[error("Invalid client key: {0}")]
    InvalidArgument(String),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
