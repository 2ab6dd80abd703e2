//! Keep several database connection strings in one config file and switch
//! the active one.
//!
//! A `.dbconfig` file in the working directory names any number of clients,
//! each with an opaque connection string; exactly one of them is "active".
//! Dbswitch reads that file in any of three formats, tells you which client
//! is active, and flips the flag on request:
//!
//! ```ignore
//! let active = dbswitch::get_active_connection()?;
//! dbswitch::set_active_connection("staging")?;
//! ```
//!
//! # The config file
//!
//! One logical schema, three interchangeable encodings picked by extension.
//! The probe order is `.dbconfig.json`, `.dbconfig.yaml`, `.dbconfig.yml`,
//! `.dbconfig.ini`; the first that exists wins.
//!
//! ```json
//! {
//!   "clients": {
//!     "dev":  { "connectionString": "postgres://localhost/dev", "active": true },
//!     "prod": { "connectionString": "postgres://db.internal/prod" }
//!   }
//! }
//! ```
//!
//! YAML is the same shape in block style. INI has no nesting for the
//! wrapper, so each client is simply a `[section]`:
//!
//! ```ini
//! [dev]
//! connectionString=postgres://localhost/dev
//! active=true
//! ```
//!
//! JSON and YAML files may also drop the `clients` wrapper and put the
//! client mapping at the top level. Fields beyond `connectionString` and
//! `active` are preserved verbatim across rewrites, so annotations in the
//! file survive `use`.
//!
//! # Resolution
//!
//! Two environment variables adjust behavior, both read per call:
//!
//! - `DBCONFIG_FILE` relocates the config file. If the path does not exist
//!   that is a hard error; the default candidates are not probed behind an
//!   explicit override.
//! - `DB_CLIENT` forces resolution to a specific key at read time, without
//!   touching the file. An unknown key is a hard error, never a silent
//!   fallback to the persisted flag.
//!
//! Without an override, the active connection is the first client in file
//! order whose `active` flag is truthy. No flagged client is a legitimate
//! state: [`get_active_connection`] returns `Ok(None)` rather than failing.
//! A file with several flagged clients is tolerated on read (first one
//! wins); [`set_active_connection`] rewrites every flag explicitly, so the
//! next write repairs the file to exactly one active client.
//!
//! # Freshness over caching
//!
//! Every operation re-locates, re-reads, and re-normalizes the file. There
//! is deliberately no process-wide cache: these files get edited by hand
//! and swapped by other processes, and a stale model would be worse than
//! the trivial cost of re-reading a small local file.
//!
//! # Errors
//!
//! All fallible operations return [`DbswitchError`]. Errors are user-facing:
//! parse failures name the file and format, unknown clients list the
//! available keys, and a missing override names the exact path it resolved.
//!
//! # CLI
//!
//! The `dbswitch` binary (`list`, `current`, `use <key>`) is a thin adapter
//! in the `cli` module, behind the default-on `clap` Cargo feature. To use
//! dbswitch as a library without clap:
//!
//! ```toml
//! dbswitch = { version = "...", default-features = false }
//! ```

pub mod env;
pub mod error;
pub mod types;

#[cfg(feature = "clap")]
pub mod cli;
mod codec;
mod locate;
mod model;
mod ops;
mod persist;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use env::EnvOverrides;
pub use error::DbswitchError;
pub use model::{ClientRecord, ConfigModel};
pub use ops::{
    LoadedConfig, get_active_connection, get_active_connection_from, get_connection_by_key,
    get_connection_by_key_from, list_connections, list_connections_from, load_file, load_from,
    set_active_connection, set_active_connection_from,
};
pub use resolve::Connection;
pub use types::{ConfigFile, Format};
