//! Rewriting the config to mark exactly one client active.
//!
//! Same split as everywhere else in the crate: a pure model transform
//! ([`set_active`]) and a thin I/O wrapper ([`write_model`]) that encodes in
//! the format the file was loaded with and overwrites it whole. There is no
//! partial or in-place edit path.

use std::path::Path;

use log::debug;

use crate::codec;
use crate::error::DbswitchError;
use crate::model::ConfigModel;
use crate::resolve;
use crate::types::Format;

/// Set `key` active and every other client explicitly inactive.
///
/// Every record gets an explicit flag, so a file that previously carried
/// zero or several actives comes out with exactly one. All other fields are
/// left untouched.
pub fn set_active(model: &mut ConfigModel, key: &str) -> Result<(), DbswitchError> {
    if !model.clients.contains_key(key) {
        return Err(resolve::unknown_client(model, key));
    }
    for (k, record) in model.clients.iter_mut() {
        record.active = Some(k == key);
    }
    Ok(())
}

/// Encode `model` as `kind` and overwrite the file at `path`.
pub fn write_model(path: &Path, model: &ConfigModel, kind: Format) -> Result<(), DbswitchError> {
    let text = codec::encode(model, kind)?;
    std::fs::write(path, text).map_err(|e| DbswitchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("rewrote {} as {kind}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{model_of, record, two_client_model};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn target_becomes_active_others_explicitly_inactive() {
        let mut model = two_client_model();
        set_active(&mut model, "clientA").unwrap();
        assert_eq!(model.clients["clientA"].active, Some(true));
        assert_eq!(model.clients["clientB"].active, Some(false));
    }

    #[test]
    fn repairs_a_multi_active_model() {
        let mut model = model_of(&[
            ("a", record("pg://a", Some(true))),
            ("b", record("pg://b", Some(true))),
            ("c", record("pg://c", None)),
        ]);
        set_active(&mut model, "c").unwrap();
        let actives: Vec<&str> = model
            .clients
            .iter()
            .filter(|(_, r)| r.is_active())
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(actives, ["c"]);
        // No record is left with an absent flag.
        assert!(model.clients.values().all(|r| r.active.is_some()));
    }

    #[test]
    fn unknown_key_is_an_error_with_available_list() {
        let mut model = two_client_model();
        let err = set_active(&mut model, "nope").unwrap_err();
        assert!(matches!(err, DbswitchError::UnknownClient { .. }));
        assert!(err.to_string().contains("clientA, clientB"));
        // Model untouched on failure.
        assert_eq!(model, two_client_model());
    }

    #[test]
    fn other_fields_survive_the_toggle() {
        let mut rec = record("pg://a", Some(true));
        rec.extra.insert("poolSize".into(), json!(7));
        let mut model = model_of(&[("a", rec), ("b", record("pg://b", None))]);

        set_active(&mut model, "b").unwrap();
        assert_eq!(model.clients["a"].connection_string, "pg://a");
        assert_eq!(model.clients["a"].extra["poolSize"], json!(7));
    }

    #[test]
    fn write_model_overwrites_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".dbconfig.json");
        fs::write(&path, "{\"old\": true}").unwrap();

        write_model(&path, &two_client_model(), Format::Json).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old"));
        assert!(content.contains("clientA"));
    }
}
