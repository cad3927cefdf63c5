//! Configuration management infrastructure
//!
//! Environment-driven configuration layered with figment:
//! - Built-in defaults
//! - Environment variable overrides, coerced before merging
//! - Fail-fast integer parsing

pub mod env;
pub mod loader;

pub use env::{EnvLookup, EnvOverrides, EnvVar, ProcessEnv, VarKind, SUPPORTED_VARS};
pub use loader::{ConfigError, ConfigLoader};
