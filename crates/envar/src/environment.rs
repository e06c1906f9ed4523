//! Environment port for abstracting environment variable access.
//!
//! The registry reads the live environment only through [`EnvironmentPort`],
//! so tests and embedders can substitute an in-memory table for `std::env`.

use std::collections::HashMap;

/// The live variable source consulted before registered defaults.
///
/// A `Some` here always beats a default for the same key, whatever kind the
/// default was registered with.
pub trait EnvironmentPort: Send + Sync {
    /// Current value of `key`, or `None` when unset.
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment through `std::env::var`.
///
/// Unset keys and values that are not valid Unicode both come back as `None`,
/// sending the lookup on to the default table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl EnvironmentPort for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(key, value);
        self
    }

    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentPort for MapEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
