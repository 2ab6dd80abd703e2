//! Active-connection resolution over a normalized model.
//!
//! Pure functions, no I/O: the model and the environment override come in as
//! values, which keeps the precedence rules testable with synthetic inputs.
//!
//! Precedence is simple and absolute: an override names the winner outright,
//! and an unknown override is a hard error rather than a silent fallback to
//! the persisted flag (the override states explicit intent, so ignoring it
//! would hide a typo). Without an override, the first record in document
//! order whose flag is truthy wins; a file with several flagged records is
//! tolerated at read time, and only the writer repairs it.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DbswitchError;
use crate::model::{ClientRecord, ConfigModel};

/// A client record tagged with its key, the shape handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub key: String,
    #[serde(rename = "connectionString")]
    pub connection_string: String,
    /// The record's own flag, coerced; an env override does not rewrite it.
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Connection {
    fn from_entry(key: &str, record: &ClientRecord) -> Self {
        Connection {
            key: key.to_string(),
            connection_string: record.connection_string.clone(),
            active: record.is_active(),
            extra: record.extra.clone(),
        }
    }
}

/// Determine the active connection.
///
/// `Ok(None)` means no record is flagged and no override is set, a
/// legitimate terminal state distinct from a missing config file.
pub fn get_active(
    model: &ConfigModel,
    override_key: Option<&str>,
) -> Result<Option<Connection>, DbswitchError> {
    if let Some(key) = override_key {
        let record = model
            .clients
            .get(key)
            .ok_or_else(|| unknown_client(model, key))?;
        return Ok(Some(Connection::from_entry(key, record)));
    }

    Ok(model
        .clients
        .iter()
        .find(|(_, record)| record.is_active())
        .map(|(key, record)| Connection::from_entry(key, record)))
}

/// Every client in model order, each tagged by its own active flag, so
/// multiple simultaneously flagged records all show as active.
pub fn list(model: &ConfigModel) -> Vec<Connection> {
    model
        .clients
        .iter()
        .map(|(key, record)| Connection::from_entry(key, record))
        .collect()
}

/// Direct lookup. A missing key is a plain `None`, never an error.
pub fn get_by_key(model: &ConfigModel, key: &str) -> Option<Connection> {
    model
        .clients
        .get(key)
        .map(|record| Connection::from_entry(key, record))
}

pub(crate) fn unknown_client(model: &ConfigModel, key: &str) -> DbswitchError {
    DbswitchError::UnknownClient {
        key: key.to_string(),
        available: model.clients.keys().cloned().collect(),
    }
}
