//! The `Envar` registry: registered defaults plus typed lookups.
//!
//! Every getter resolves the key through [`Envar::get`] first, so a key that
//! is missing everywhere surfaces as [`EnvarError::KeyNotFound`] regardless
//! of the requested type. Values that are present but unusable for the
//! requested type are logged and replaced by the type's zero value.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::environment::{EnvironmentPort, SystemEnvironment};
use crate::error::EnvarError;
use crate::value::EnvValue;

/// Environment accessor with a fallback default table.
///
/// Build one during startup, register defaults with [`Envar::set_def`], then
/// share it (`&Envar` or `Arc<Envar>`) with whatever needs configuration.
pub struct Envar {
    environment: Arc<dyn EnvironmentPort>,
    defaults: HashMap<String, EnvValue>,
}

impl Envar {
    /// Registry backed by the process environment.
    pub fn new() -> Self {
        Self::with_environment(Arc::new(SystemEnvironment))
    }

    /// Registry backed by a custom environment source.
    pub fn with_environment(environment: Arc<dyn EnvironmentPort>) -> Self {
        Self {
            environment,
            defaults: HashMap::new(),
        }
    }

    /// Register the value returned when `key` is not set in the environment.
    ///
    /// Registering the same key again replaces the earlier default.
    pub fn set_def(&mut self, key: impl Into<String>, value: impl Into<EnvValue>) {
        self.defaults.insert(key.into(), value.into());
    }

    /// All registered defaults.
    pub fn defaults(&self) -> &HashMap<String, EnvValue> {
        &self.defaults
    }

    pub fn has_def(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    /// Resolve `key` without coercion.
    ///
    /// The environment value wins over a registered default and is always
    /// returned as [`EnvValue::String`]. Defaults are returned as registered.
    ///
    /// # Errors
    ///
    /// [`EnvarError::KeyNotFound`] when neither source knows the key.
    pub fn get(&self, key: &str) -> Result<EnvValue, EnvarError> {
        if let Some(value) = self.environment.get_var(key) {
            return Ok(EnvValue::String(value));
        }

        match self.defaults.get(key) {
            Some(value) => Ok(value.clone()),
            None => {
                tracing::error!(key = %key, "variable not found");
                Err(EnvarError::KeyNotFound {
                    key: key.to_string(),
                })
            }
        }
    }

    /// String value for `key`; `""` if the resolved value is not a string.
    pub fn string(&self, key: &str) -> Result<String, EnvarError> {
        let value = self.get(key)?;
        Ok(match value.as_str() {
            Some(s) => s.to_string(),
            None => degraded("string", key, &value),
        })
    }

    /// Integer value for `key`, parsing strings as base-10; `0` otherwise.
    pub fn int(&self, key: &str) -> Result<i64, EnvarError> {
        let value = self.get(key)?;
        let parsed = match &value {
            EnvValue::Int(i) => Some(*i),
            EnvValue::String(s) => s.parse::<i64>().ok(),
            _ => None,
        };
        Ok(parsed.unwrap_or_else(|| degraded("int", key, &value)))
    }

    /// Boolean value for `key`; `false` otherwise.
    ///
    /// Accepted strings are `1`, `t`, `true`, `0`, `f` and `false` in any case.
    pub fn bool(&self, key: &str) -> Result<bool, EnvarError> {
        let value = self.get(key)?;
        let parsed = match &value {
            EnvValue::Bool(b) => Some(*b),
            EnvValue::String(s) => parse_bool(s),
            _ => None,
        };
        Ok(parsed.unwrap_or_else(|| degraded("bool", key, &value)))
    }

    /// Float value for `key`; `0.0` otherwise.
    ///
    /// Integer defaults are not widened to floats.
    pub fn float(&self, key: &str) -> Result<f64, EnvarError> {
        let value = self.get(key)?;
        let parsed = match &value {
            EnvValue::Float(f) => Some(*f),
            EnvValue::String(s) => s.parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.unwrap_or_else(|| degraded("float", key, &value)))
    }

    /// Duration for a key holding a millisecond count (e.g. `1000` for one
    /// second); `Duration::ZERO` otherwise.
    ///
    /// A default registered as a [`Duration`] is returned unchanged. Negative
    /// counts are treated as unusable.
    pub fn milliseconds(&self, key: &str) -> Result<Duration, EnvarError> {
        let value = self.get(key)?;
        let parsed = match &value {
            EnvValue::Duration(d) => Some(*d),
            EnvValue::Int(i) => millis(*i),
            EnvValue::String(s) => s.parse::<i64>().ok().and_then(millis),
            _ => None,
        };
        Ok(parsed.unwrap_or_else(|| degraded("milliseconds", key, &value)))
    }
}

impl Default for Envar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Envar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envar")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

fn degraded<T: Default>(getter: &'static str, key: &str, value: &EnvValue) -> T {
    tracing::warn!(
        getter,
        key = %key,
        kind = value.kind(),
        "no usable value for key"
    );
    T::default()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

fn millis(count: i64) -> Option<Duration> {
    u64::try_from(count).ok().map(Duration::from_millis)
}
