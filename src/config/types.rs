//! Core configuration types for README conversion
//!
//! `ConvertOptions` drives the HTML-to-text pass and can be used on its own
//! for in-memory conversion. `ConverterConfig` adds the file paths used by
//! the binary.

use std::path::PathBuf;

use crate::utils::{DEFAULT_BASE_URL, DEFAULT_WORDWRAP};

/// Options for the Markdown → HTML → text pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Repository blob URL prefixed to site-relative paths.
    ///
    /// **INVARIANT:** absolute http(s) URL without a trailing slash
    /// (normalized in the builder).
    pub base_url: String,

    /// Wrap column for non-preformatted text; `None` disables wrapping
    pub wordwrap: Option<usize>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wordwrap: Some(DEFAULT_WORDWRAP),
        }
    }
}

/// Main configuration struct for one conversion run
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub(crate) input_path: PathBuf,
    pub(crate) output_path: PathBuf,
    pub(crate) options: ConvertOptions,
}
