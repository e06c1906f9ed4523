//! Values that can be registered as defaults.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A configuration value of one of the five supported kinds.
///
/// Values read from the process environment are always [`EnvValue::String`];
/// the other kinds only come from registered defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvValue {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
    /// Read back by [`Envar::milliseconds`](crate::Envar::milliseconds) as-is;
    /// [`Envar::int`](crate::Envar::int) does not accept it.
    Duration(Duration),
}

impl EnvValue {
    /// Name of the kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Duration(_) => "duration",
        }
    }

    /// The string payload, if this is [`EnvValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Float(x) => write!(f, "{}", x),
            Self::Duration(d) => write!(f, "{}ms", d.as_millis()),
        }
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for EnvValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for EnvValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<Duration> for EnvValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

// Lossless integer widths only; u64/usize would need a fallible conversion.
macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for EnvValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
