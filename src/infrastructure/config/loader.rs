use std::num::ParseIntError;

use figment::providers::Serialized;
use figment::Figment;
use thiserror::Error;
use tracing::debug;

use super::env::{EnvLookup, EnvOverrides, ProcessEnv};
use crate::domain::models::ServiceConfig;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An integer variable was set to something that is not an integer
    #[error("invalid value for {var}: {value:?} is not a valid integer")]
    InvalidConfigValue {
        /// Name of the offending environment variable
        var: &'static str,
        /// Raw value as found in the environment
        value: String,
        /// Underlying parse failure
        #[source]
        source: ParseIntError,
    },

    /// Merged providers could not be extracted into a `ServiceConfig`
    #[error("failed to extract configuration: {0}")]
    Extract(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Builds the [`ServiceConfig`] from environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in defaults
    /// 2. Environment variables listed in [`SUPPORTED_VARS`](super::SUPPORTED_VARS)
    ///
    /// A present-but-unparsable integer variable is fatal; there is no
    /// fallback to the default.
    pub fn load() -> Result<ServiceConfig, ConfigError> {
        Self::load_from(&ProcessEnv)
    }

    /// Load configuration from an arbitrary variable source
    pub fn load_from(lookup: &impl EnvLookup) -> Result<ServiceConfig, ConfigError> {
        let config: ServiceConfig = Self::figment(lookup)?.extract()?;

        debug!(
            vector_db = %config.vector_db_endpoint(),
            rel_db = %config.rel_db_endpoint(),
            collection = %config.default_collection,
            "configuration loaded"
        );

        Ok(config)
    }

    /// The layered figment behind [`load_from`](Self::load_from).
    ///
    /// Callers may merge further providers before extracting; anything they
    /// merge takes precedence over the environment.
    pub fn figment(lookup: &impl EnvLookup) -> Result<Figment, ConfigError> {
        let overrides = EnvOverrides::capture(lookup)?;

        Ok(Figment::new()
            .merge(Serialized::defaults(ServiceConfig::default()))
            .merge(overrides))
    }
}
