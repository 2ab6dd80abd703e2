//! Config file discovery.
//!
//! Two resolution paths, never mixed:
//!
//! - An explicit override (the `DBCONFIG_FILE` environment variable) is
//!   authoritative. The path is resolved against the working directory and a
//!   missing target is a hard error; the candidate probe is not attempted as
//!   a fallback, because an override states explicit intent and silently
//!   ignoring it would mask a typo.
//! - Without an override, the candidate filenames are probed in fixed order
//!   and the first that exists wins. No candidate existing is `Ok(None)`,
//!   not an error; callers decide what absence means.
//!
//! Pure filesystem probe, no side effects.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::DbswitchError;

/// Candidate config filenames, probed in order.
pub const CANDIDATES: [&str; 4] = [
    ".dbconfig.json",
    ".dbconfig.yaml",
    ".dbconfig.yml",
    ".dbconfig.ini",
];

/// Resolve the config file governing `dir`, honoring an optional override.
pub fn locate_from(
    dir: &Path,
    override_path: Option<&Path>,
) -> Result<Option<PathBuf>, DbswitchError> {
    if let Some(p) = override_path {
        let resolved = if p.is_absolute() {
            p.to_path_buf()
        } else {
            dir.join(p)
        };
        if resolved.exists() {
            debug!("using config override {}", resolved.display());
            return Ok(Some(resolved));
        }
        return Err(DbswitchError::OverrideNotFound { path: resolved });
    }

    for name in CANDIDATES {
        let candidate = dir.join(name);
        if candidate.exists() {
            debug!("located config {}", candidate.display());
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_candidates_returns_none() {
        let dir = TempDir::new().unwrap();
        let located = locate_from(dir.path(), None).unwrap();
        assert_eq!(located, None);
    }

    #[test]
    fn first_existing_candidate_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".dbconfig.yml"), "clients: {}\n").unwrap();
        let located = locate_from(dir.path(), None).unwrap();
        assert_eq!(located, Some(dir.path().join(".dbconfig.yml")));
    }

    #[test]
    fn probe_order_is_fixed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".dbconfig.ini"), "").unwrap();
        fs::write(dir.path().join(".dbconfig.json"), "{}").unwrap();
        // json comes before ini in the candidate list
        let located = locate_from(dir.path(), None).unwrap();
        assert_eq!(located, Some(dir.path().join(".dbconfig.json")));
    }

    // --- override path ---

    #[test]
    fn override_resolves_relative_to_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.yaml"), "clients: {}\n").unwrap();
        let located = locate_from(dir.path(), Some(Path::new("custom.yaml"))).unwrap();
        assert_eq!(located, Some(dir.path().join("custom.yaml")));
    }

    #[test]
    fn absolute_override_passes_through() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("abs.json");
        fs::write(&target, "{}").unwrap();
        let located = locate_from(Path::new("/elsewhere"), Some(&target)).unwrap();
        assert_eq!(located, Some(target));
    }

    #[test]
    fn missing_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = locate_from(dir.path(), Some(Path::new("nope.json")));
        match result {
            Err(DbswitchError::OverrideNotFound { path }) => {
                assert_eq!(path, dir.path().join("nope.json"));
            }
            other => panic!("expected OverrideNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_override_does_not_fall_back_to_candidates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".dbconfig.json"), "{}").unwrap();
        let result = locate_from(dir.path(), Some(Path::new("nope.json")));
        assert!(matches!(
            result,
            Err(DbswitchError::OverrideNotFound { .. })
        ));
    }
}
