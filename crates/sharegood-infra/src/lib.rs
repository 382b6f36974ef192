//! Infrastructure layer for the ShareGood assistant.
//!
//! Resolves the data directory and loads `config.toml` from it.

pub mod config;
pub mod paths;
