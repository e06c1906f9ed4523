//! `.env` file loading into the process environment.
//!
//! Parsing is delegated to `dotenvy`. Each file is parsed completely before
//! any of its variables are applied, so a file with a bad line changes
//! nothing. Variables that are already set are never overwritten, so when
//! several files define the same key the first file listed wins, and the real
//! environment beats all of them.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::EnvarError;

/// File loaded when no file names are given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load `filenames` in order, or [`DEFAULT_ENV_FILE`] if the slice is empty.
///
/// Stops at the first file that cannot be read or parsed. Nothing from that
/// file is applied; variables from files before it stay loaded.
///
/// # Errors
///
/// [`EnvarError::Load`] naming the failing file.
pub fn load<P: AsRef<Path>>(filenames: &[P]) -> Result<(), EnvarError> {
    for path in resolve(filenames) {
        let vars = read_file(&path).map_err(|source| EnvarError::Load {
            path: path.clone(),
            source,
        })?;
        apply(vars);
        tracing::debug!(path = %path.display(), "loaded env file");
    }
    Ok(())
}

/// Load [`DEFAULT_ENV_FILE`] from the current directory.
pub fn load_default() -> Result<(), EnvarError> {
    load(&[DEFAULT_ENV_FILE])
}

/// Like [`load`], but files that do not exist are skipped.
///
/// Returns the paths that were actually loaded. Typical use is layering a
/// local override over a shared file: `load_optional(&[".env.local", ".env"])`.
///
/// # Errors
///
/// [`EnvarError::Load`] when an existing file cannot be read or parsed.
pub fn load_optional<P: AsRef<Path>>(filenames: &[P]) -> Result<Vec<PathBuf>, EnvarError> {
    let mut loaded = Vec::new();

    for path in resolve(filenames) {
        match read_file(&path) {
            Ok(vars) => {
                apply(vars);
                tracing::debug!(path = %path.display(), "loaded env file");
                loaded.push(path);
            }
            Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "env file not found, skipping");
            }
            Err(source) => return Err(EnvarError::Load { path, source }),
        }
    }

    Ok(loaded)
}

fn read_file(path: &Path) -> Result<Vec<(String, String)>, dotenvy::Error> {
    dotenvy::from_path_iter(path)?.collect()
}

/// Set every pair whose key is not already present in the process environment.
fn apply(vars: Vec<(String, String)>) {
    for (key, value) in vars {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

fn resolve<P: AsRef<Path>>(filenames: &[P]) -> Vec<PathBuf> {
    if filenames.is_empty() {
        return vec![PathBuf::from(DEFAULT_ENV_FILE)];
    }
    filenames.iter().map(|p| p.as_ref().to_path_buf()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_uses_default_file() {
        let none: &[&str] = &[];
        assert_eq!(resolve(none), vec![PathBuf::from(".env")]);
    }

    #[test]
    fn test_resolve_keeps_order() {
        assert_eq!(
            resolve(&[".env.local", ".env"]),
            vec![PathBuf::from(".env.local"), PathBuf::from(".env")]
        );
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = load(&["/nonexistent/envar-test/.env"]).expect_err("missing file");
        assert!(matches!(err, EnvarError::Load { .. }));
    }

    #[test]
    fn test_load_optional_skips_missing_file() {
        let loaded = load_optional(&["/nonexistent/envar-test/.env"]).expect("optional");
        assert!(loaded.is_empty());
    }
}
