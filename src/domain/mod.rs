//! Domain layer for the molecular similarity search server
//!
//! Plain data types with no knowledge of where their values come from.

pub mod models;
