//! Typed environment variable access with registered defaults.
//!
//! `envar` reads configuration from the process environment (optionally
//! pre-populated from `.env` files) and coerces it to the type the caller
//! asks for. Keys missing from the environment fall back to defaults
//! registered on an [`Envar`] registry.
//!
//! # Lookup order
//!
//! ```text
//! ┌──────────────────────┐   miss   ┌──────────────────────┐   miss
//! │ EnvironmentPort      │ ───────► │ registered defaults  │ ───────► KeyNotFound
//! │ (process env)        │          │ (Envar::set_def)     │
//! └──────────────────────┘          └──────────────────────┘
//! ```
//!
//! A value found in the environment always wins, even when the default was
//! registered with a different kind.
//!
//! # Failure tiers
//!
//! - **Missing key** - returned as [`EnvarError::KeyNotFound`]. Propagate it
//!   with `?` to keep configuration mistakes fatal.
//! - **Unusable value** - the typed getters log a warning and return the
//!   type's zero value (`""`, `0`, `false`, `0.0`, `Duration::ZERO`).
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use envar::Envar;
//!
//! fn main() -> Result<(), envar::EnvarError> {
//!     let mut env = Envar::new();
//!     env.set_def("HTTP_PORT", 8080);
//!     env.set_def("REQUEST_TIMEOUT_MS", 1500);
//!
//!     // Existing variables are never overwritten by the file.
//!     envar::load_optional(&[".env.local", ".env"])?;
//!
//!     let port = env.int("HTTP_PORT")?;
//!     let timeout: Duration = env.milliseconds("REQUEST_TIMEOUT_MS")?;
//!     # let _ = (port, timeout);
//!     Ok(())
//! }
//! ```

pub mod environment;
pub mod error;
pub mod loader;
pub mod registry;
pub mod value;

// Re-export the public surface at crate root for convenience
pub use environment::{EnvironmentPort, MapEnvironment, SystemEnvironment};
pub use error::EnvarError;
pub use loader::{load, load_default, load_optional, DEFAULT_ENV_FILE};
pub use registry::Envar;
pub use value::EnvValue;
