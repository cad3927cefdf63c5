//! Infrastructure layer module
//!
//! This module contains the adapters between the process and the domain:
//! - Configuration loading from environment variables
//! - Logging infrastructure
pub mod config;
pub mod logging;
