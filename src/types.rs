use std::fmt;
use std::path::PathBuf;

/// Serialization format of a config file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Ini,
}

impl Format {
    /// Map a file extension (without the dot, any casing) to a format.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "ini" => Some(Format::Ini),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Ini => "INI",
        };
        write!(f, "{name}")
    }
}

/// A located config file: where it lives and which codec reads it.
///
/// The `kind` tag is what lets a later rewrite target the same format the
/// file was loaded in, instead of re-inferring it at save time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub kind: Format,
}
