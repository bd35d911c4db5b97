//! Configuration module for README conversion
//!
//! This module provides the `ConverterConfig` struct and its builder,
//! replacing fixed input/output paths with explicit, validated parameters.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ConverterConfigBuilder;
pub use types::{ConvertOptions, ConverterConfig};
