#[cfg(test)]
pub mod test {
    use indexmap::IndexMap;
    use serde_json::Map;

    use crate::model::{ClientRecord, ConfigModel};

    /// The two-client document used across test modules, one rendition per
    /// format: `clientA` inactive, `clientB` active.
    pub const JSON_TWO_CLIENTS: &str = r#"{
  "clients": {
    "clientA": {
      "connectionString": "pg://a",
      "active": false
    },
    "clientB": {
      "connectionString": "pg://b",
      "active": true
    }
  }
}
"#;

    pub const YAML_TWO_CLIENTS: &str = "clients:\n  clientA:\n    connectionString: pg://a\n    active: false\n  clientB:\n    connectionString: pg://b\n    active: true\n";

    pub const INI_TWO_CLIENTS: &str =
        "[clientA]\nconnectionString=pg://a\nactive=false\n\n[clientB]\nconnectionString=pg://b\nactive=true\n";

    pub fn record(connection_string: &str, active: Option<bool>) -> ClientRecord {
        ClientRecord {
            connection_string: connection_string.to_string(),
            active,
            extra: Map::new(),
        }
    }

    pub fn model_of(entries: &[(&str, ClientRecord)]) -> ConfigModel {
        let mut clients = IndexMap::new();
        for (key, rec) in entries {
            clients.insert(key.to_string(), rec.clone());
        }
        ConfigModel { clients }
    }

    /// `clientA` (inactive) then `clientB` (active), matching the fixture
    /// documents above.
    pub fn two_client_model() -> ConfigModel {
        model_of(&[
            ("clientA", record("pg://a", Some(false))),
            ("clientB", record("pg://b", Some(true))),
        ])
    }
}
