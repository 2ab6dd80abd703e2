//! Per-format decode/encode between raw config text and a generic value.
//!
//! All three formats funnel into [`serde_json::Value`] as the interchange
//! shape (maps keep document order via the `preserve_order` feature); the
//! typed model is only built afterwards, in [`model`](crate::model). The
//! encode direction takes the typed model, because only a normalized model
//! is ever written back.
//!
//! Format quirks worth knowing:
//!
//! - INI has no nesting for a top-level wrapper, so `[section]`s decode
//!   straight into the client bucket and encode writes one section per
//!   client with no `clients` wrapper. Keys outside any section surface as
//!   top-level string scalars, which the normalizer then rejects as
//!   non-object client entries.
//! - JSON encodes pretty-printed with keys in model order, so rewriting a
//!   file only touches the toggled `active` lines.

use std::path::Path;

use indexmap::IndexMap;
use ini::Ini;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DbswitchError;
use crate::model::{self, ClientRecord, ConfigModel};
use crate::types::Format;

/// Infer the codec for a path from its extension, case-insensitively.
///
/// `None` means no codec applies; upstream treats that as an unsupported
/// format.
pub fn detect_kind(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?;
    Format::from_extension(ext)
}

/// Decode raw config text into a generic nested value.
///
/// `path` is only for error context; no I/O happens here.
pub fn decode(text: &str, kind: Format, path: &Path) -> Result<Value, DbswitchError> {
    match kind {
        Format::Json => serde_json::from_str(text).map_err(|e| parse_error(path, kind, e)),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| parse_error(path, kind, e)),
        Format::Ini => decode_ini(text, path),
    }
}

fn parse_error(path: &Path, format: Format, err: impl std::fmt::Display) -> DbswitchError {
    DbswitchError::ParseError {
        path: path.to_path_buf(),
        format,
        reason: err.to_string(),
    }
}

fn decode_ini(text: &str, path: &Path) -> Result<Value, DbswitchError> {
    let ini = Ini::load_from_str(text).map_err(|e| parse_error(path, Format::Ini, e))?;
    let mut root = Map::new();
    for (section, props) in ini.iter() {
        match section {
            Some(name) => {
                let mut entry = Map::new();
                for (k, v) in props.iter() {
                    entry.insert(k.to_string(), Value::String(v.to_string()));
                }
                root.insert(name.to_string(), Value::Object(entry));
            }
            None => {
                for (k, v) in props.iter() {
                    root.insert(k.to_string(), Value::String(v.to_string()));
                }
            }
        }
    }
    Ok(Value::Object(root))
}

/// Serialization shape shared by the JSON and YAML encoders.
#[derive(Serialize)]
struct Document<'a> {
    clients: &'a IndexMap<String, ClientRecord>,
}

/// Encode a normalized model back to text in `kind`.
pub fn encode(model: &ConfigModel, kind: Format) -> Result<String, DbswitchError> {
    let doc = Document {
        clients: &model.clients,
    };
    match kind {
        Format::Json => serde_json::to_string_pretty(&doc)
            .map(|s| s + "\n")
            .map_err(encode_error),
        Format::Yaml => serde_yaml::to_string(&doc).map_err(encode_error),
        Format::Ini => encode_ini(model),
    }
}

fn encode_error(err: impl std::fmt::Display) -> DbswitchError {
    DbswitchError::InvalidConfig(format!("failed to serialize config: {err}"))
}

fn encode_ini(config: &ConfigModel) -> Result<String, DbswitchError> {
    let mut ini = Ini::new();
    for (key, record) in &config.clients {
        let mut section = ini.with_section(Some(key.as_str()));
        section.set(model::CONNECTION_STRING_KEY, record.connection_string.as_str());
        if let Some(active) = record.active {
            section.set(model::ACTIVE_KEY, if active { "true" } else { "false" });
        }
        for (k, v) in &record.extra {
            section.set(k.as_str(), ini_scalar(v));
        }
    }
    let mut buf = Vec::new();
    ini.write_to(&mut buf).map_err(encode_error)?;
    String::from_utf8(buf).map_err(encode_error)
}

/// Render a preserved extra field as an INI value. Structured values can
/// only appear when the file was not INI to begin with; compact JSON is the
/// best we can do for them.
fn ini_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
