//! Environment inputs: the two override variables and the optional `.env`
//! file.
//!
//! `DBCONFIG_FILE` relocates the config file; `DB_CLIENT` forces connection
//! resolution to a specific key at read time. Both are read per operation,
//! never cached, so a caller that changes the environment between calls sees
//! the change. The `.env` loader is for the binary only and runs once at
//! process start; variables already set by the shell keep precedence.

use std::path::PathBuf;

/// Overrides the config file location.
pub const CONFIG_FILE_VAR: &str = "DBCONFIG_FILE";
/// Forces connection resolution to a specific client key.
pub const CLIENT_VAR: &str = "DB_CLIENT";
/// Filename of the optional local environment file.
pub const ENV_FILE: &str = ".env";

/// Snapshot of the two override variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    /// Explicit config file path, absolute or working-directory-relative.
    pub config_file: Option<PathBuf>,
    /// Client key that wins resolution outright.
    pub client: Option<String>,
}

impl EnvOverrides {
    /// Read the override variables from the process environment.
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit pairs. Takes an iterator so tests can pass
    /// synthetic data instead of `std::env::vars()`. Empty values count as
    /// unset.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut overrides = EnvOverrides::default();
        for (key, value) in vars {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                CONFIG_FILE_VAR => overrides.config_file = Some(PathBuf::from(value)),
                CLIENT_VAR => overrides.client = Some(value),
                _ => {}
            }
        }
        overrides
    }
}

/// Parse `KEY=VALUE` lines from a dotenv-style file.
///
/// Blank lines and `#` comments are skipped, a leading `export ` is
/// tolerated, and single or double quotes around the value are stripped.
pub fn parse_env_file(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().trim_start_matches("export ").trim();
        if key.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);
        pairs.push((key.to_string(), value.to_string()));
    }
    pairs
}

/// Load `.env` from the working directory into the process environment.
///
/// Missing file is not an error. Call once at startup, before any threads
/// are spawned.
pub fn load_env_file() {
    let Ok(text) = std::fs::read_to_string(ENV_FILE) else {
        return;
    };
    for (key, value) in parse_env_file(&text) {
        if std::env::var_os(&key).is_none() {
            // Single-threaded startup; see the safety contract of set_var.
            unsafe { std::env::set_var(&key, &value) };
        }
    }
}
