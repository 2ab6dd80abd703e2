//! The operation surface consumed by the CLI or any other caller.
//!
//! Every operation performs its own locate, read, decode, normalize cycle.
//! Nothing is cached between calls and there is no shared state, so each
//! result reflects the latest on-disk file and the environment as it is at
//! call time. The zero-argument functions read the working directory and
//! the process environment; each has a `_from(dir, env)` twin that takes
//! both explicitly, for callers and tests that pin them.
//!
//! Writes go through the same cycle plus an encode-and-overwrite of the
//! whole file. Two processes racing a write is last-writer-wins; this is a
//! local developer-tooling file, not a shared transactional store.

use std::path::{Path, PathBuf};

use log::debug;

use crate::codec;
use crate::env::EnvOverrides;
use crate::error::DbswitchError;
use crate::locate;
use crate::model::{self, ConfigModel};
use crate::persist;
use crate::resolve::{self, Connection};
use crate::types::ConfigFile;

/// A freshly loaded config: the model plus where it came from, so a rewrite
/// can target the same file in the same format.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub file: ConfigFile,
    pub model: ConfigModel,
}

/// Locate, read, decode and normalize the config governing `dir`.
///
/// No locatable file is `ConfigNotFound` here; only the locator itself
/// treats absence as a non-error.
pub fn load_from(dir: &Path, env: &EnvOverrides) -> Result<LoadedConfig, DbswitchError> {
    let Some(path) = locate::locate_from(dir, env.config_file.as_deref())? else {
        return Err(DbswitchError::ConfigNotFound {
            dir: dir.to_path_buf(),
        });
    };
    load_file(&path)
}

/// Load one specific config file, inferring its format from the extension.
pub fn load_file(path: &Path) -> Result<LoadedConfig, DbswitchError> {
    let kind = codec::detect_kind(path).ok_or_else(|| DbswitchError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|e| DbswitchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raw = codec::decode(&text, kind, path)?;
    let model = model::normalize(raw, kind)?;
    debug!(
        "loaded {} client(s) from {} ({kind})",
        model.clients.len(),
        path.display()
    );
    Ok(LoadedConfig {
        file: ConfigFile {
            path: path.to_path_buf(),
            kind,
        },
        model,
    })
}

/// Resolve the active connection, honoring a `DB_CLIENT` override.
pub fn get_active_connection() -> Result<Option<Connection>, DbswitchError> {
    get_active_connection_from(&working_dir()?, &EnvOverrides::from_process())
}

pub fn get_active_connection_from(
    dir: &Path,
    env: &EnvOverrides,
) -> Result<Option<Connection>, DbswitchError> {
    let loaded = load_from(dir, env)?;
    resolve::get_active(&loaded.model, env.client.as_deref())
}

/// Every configured connection in file order.
pub fn list_connections() -> Result<Vec<Connection>, DbswitchError> {
    list_connections_from(&working_dir()?, &EnvOverrides::from_process())
}

pub fn list_connections_from(
    dir: &Path,
    env: &EnvOverrides,
) -> Result<Vec<Connection>, DbswitchError> {
    Ok(resolve::list(&load_from(dir, env)?.model))
}

/// Look one connection up by key. An unknown key is `Ok(None)`.
pub fn get_connection_by_key(key: &str) -> Result<Option<Connection>, DbswitchError> {
    get_connection_by_key_from(&working_dir()?, &EnvOverrides::from_process(), key)
}

pub fn get_connection_by_key_from(
    dir: &Path,
    env: &EnvOverrides,
    key: &str,
) -> Result<Option<Connection>, DbswitchError> {
    validate_key(key)?;
    Ok(resolve::get_by_key(&load_from(dir, env)?.model, key))
}

/// Mark `key` active and rewrite the config file in its original format.
pub fn set_active_connection(key: &str) -> Result<(), DbswitchError> {
    set_active_connection_from(&working_dir()?, &EnvOverrides::from_process(), key)
}

pub fn set_active_connection_from(
    dir: &Path,
    env: &EnvOverrides,
    key: &str,
) -> Result<(), DbswitchError> {
    validate_key(key)?;
    let mut loaded = load_from(dir, env)?;
    persist::set_active(&mut loaded.model, key)?;
    persist::write_model(&loaded.file.path, &loaded.model, loaded.file.kind)?;
    debug!(
        "active connection set to '{key}' in {}",
        loaded.file.path.display()
    );
    Ok(())
}

fn validate_key(key: &str) -> Result<(), DbswitchError> {
    if key.trim().is_empty() {
        return Err(DbswitchError::InvalidArgument(
            "client key must be a non-empty string".into(),
        ));
    }
    Ok(())
}

fn working_dir() -> Result<PathBuf, DbswitchError> {
    std::env::current_dir().map_err(|e| DbswitchError::Io {
        path: PathBuf::from("."),
        source: e,
    })
}
