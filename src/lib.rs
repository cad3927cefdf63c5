//! Molsearch - configuration for the molecular similarity search server
//!
//! Reads Milvus, MySQL, filesystem and log-retention settings from the
//! environment into an immutable [`ServiceConfig`], falling back to built-in
//! defaults for anything unset.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `ServiceConfig` record
//! - **Infrastructure Layer** (`infrastructure`): environment loading and logging
//! - **CLI Layer** (`cli`): the `molsearch` command
//!
//! # Example
//!
//! ```no_run
//! use molsearch::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     println!("searching {} on {}", config.default_collection, config.vector_db_endpoint());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::ServiceConfig;
pub use infrastructure::config::{
    ConfigError, ConfigLoader, EnvLookup, EnvVar, ProcessEnv, VarKind, SUPPORTED_VARS,
};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
