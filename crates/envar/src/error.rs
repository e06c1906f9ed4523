//! Envar error types

use std::path::PathBuf;

/// Error types for environment lookups and `.env` loading
#[derive(Debug, thiserror::Error)]
pub enum EnvarError {
    /// The key is neither set in the environment nor registered as a default.
    #[error("variable not found, key: {key}")]
    KeyNotFound { key: String },

    #[error("failed to load env file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl EnvarError {
    /// True for the missing-key outcome, as opposed to an I/O or parse failure.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
