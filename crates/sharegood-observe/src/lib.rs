//! Tracing setup for the ShareGood assistant.

pub mod fields;
pub mod tracing_setup;
