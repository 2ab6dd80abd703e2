//! The canonical in-memory model and the normalizer that builds it.
//!
//! Decoding leaves the document as a generic [`serde_json::Value`]; this
//! module is the one place where that raw shape becomes typed. Validation
//! and coercion happen here and nowhere else:
//!
//! - JSON and YAML documents may carry a top-level `clients` wrapper or put
//!   the client mapping directly at the top level. INI documents are always
//!   the bare mapping (the format has no nesting to spell a wrapper).
//! - `connectionString` is required and non-blank, but otherwise opaque; it
//!   is never parsed as a URI.
//! - `active` is coerced to a boolean when present and left absent
//!   otherwise. A file with several active records is accepted here; the
//!   read side tolerates the ambiguity and only the writer repairs it.
//! - Every unrecognized field is carried through verbatim, in document
//!   order, so a rewrite never drops user data.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DbswitchError;
use crate::types::Format;

pub const CLIENTS_KEY: &str = "clients";
pub const CONNECTION_STRING_KEY: &str = "connectionString";
pub const ACTIVE_KEY: &str = "active";

/// One named connection entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRecord {
    /// Opaque connection string, stored verbatim.
    #[serde(rename = "connectionString")]
    pub connection_string: String,
    /// `None` when the source document carries no `active` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Unrecognized fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClientRecord {
    /// Whether this record's own flag marks it active.
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }
}

/// The normalized config: client key to record, in document order.
///
/// Zero clients is a validation error, not an empty-but-valid state, so a
/// constructed model always has at least one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigModel {
    pub clients: IndexMap<String, ClientRecord>,
}

/// Convert a decoded raw value into the canonical model.
pub fn normalize(raw: Value, kind: Format) -> Result<ConfigModel, DbswitchError> {
    let Value::Object(mut root) = raw else {
        return Err(DbswitchError::InvalidConfig(
            "Config must be a mapping of client definitions".into(),
        ));
    };

    let clients_raw = match kind {
        // INI sections land at the top level by construction.
        Format::Ini => root,
        Format::Json | Format::Yaml => match root.remove(CLIENTS_KEY) {
            Some(Value::Object(m)) => m,
            Some(_) => {
                return Err(DbswitchError::InvalidConfig(
                    "Config must contain at least one client definition".into(),
                ));
            }
            // No wrapper key: the whole top level is the client mapping.
            None => root,
        },
    };

    if clients_raw.is_empty() {
        return Err(DbswitchError::InvalidConfig(
            "Config must contain at least one client definition".into(),
        ));
    }

    let mut clients = IndexMap::with_capacity(clients_raw.len());
    for (key, value) in clients_raw {
        let Value::Object(mut fields) = value else {
            return Err(DbswitchError::InvalidConfig(format!(
                "Client \"{key}\" must be an object with at least a connectionString field"
            )));
        };

        let connection_string = match fields.shift_remove(CONNECTION_STRING_KEY) {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            Some(Value::String(_)) => {
                return Err(DbswitchError::InvalidConfig(format!(
                    "Client \"{key}\": connectionString must not be blank"
                )));
            }
            _ => {
                return Err(DbswitchError::InvalidConfig(format!(
                    "Client \"{key}\": connectionString must be a non-empty string"
                )));
            }
        };

        let active = fields.shift_remove(ACTIVE_KEY).map(|v| truthy(&v));

        clients.insert(
            key,
            ClientRecord {
                connection_string,
                active,
                extra: fields,
            },
        );
    }

    Ok(ConfigModel { clients })
}

/// Coerce a raw `active` value to a boolean.
///
/// Booleans pass through; strings are true only for the conventional
/// true-spellings `"true"`, `"1"`, `"yes"` (any casing, trimmed), which
/// makes `"false"` and `"no"` false; numbers are true iff non-zero;
/// null, arrays and objects are false.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes"
        ),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
