//! Fluent builder for `ConverterConfig`
//!
//! Every field has a default, so `ConverterConfig::builder().build()` yields
//! the `README.md` → `README.txt` run. `build()` validates the base URL.

use std::path::PathBuf;

use crate::error::Result;
use crate::utils::{
    DEFAULT_BASE_URL, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_WORDWRAP,
    normalize_base_url,
};

use super::types::{ConvertOptions, ConverterConfig};

#[derive(Debug, Clone)]
pub struct ConverterConfigBuilder {
    pub(crate) input_path: PathBuf,
    pub(crate) output_path: PathBuf,
    pub(crate) base_url: String,
    pub(crate) wordwrap: Option<usize>,
}

impl Default for ConverterConfigBuilder {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            wordwrap: Some(DEFAULT_WORDWRAP),
        }
    }
}

impl ConverterConfig {
    /// Create a builder for configuring a `ConverterConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::default()
    }
}

impl ConverterConfigBuilder {
    #[must_use]
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the wrap column; `None` disables wrapping
    #[must_use]
    pub fn wordwrap(mut self, width: Option<usize>) -> Self {
        self.wordwrap = width;
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL.
    pub fn build(self) -> Result<ConverterConfig> {
        let base_url = normalize_base_url(&self.base_url)?;

        Ok(ConverterConfig {
            input_path: self.input_path,
            output_path: self.output_path,
            options: ConvertOptions {
                base_url,
                // A zero width would put every word on its own line
                wordwrap: self.wordwrap.filter(|w| *w > 0),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_readme_run() {
        let config = ConverterConfig::builder().build().unwrap();
        assert_eq!(config.input_path(), std::path::Path::new("README.md"));
        assert_eq!(config.output_path(), std::path::Path::new("README.txt"));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.wordwrap(), Some(80));
        assert_eq!(config.options(), &ConvertOptions::default());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = ConverterConfig::builder()
            .base_url("https://github.com/acme/widget/blob/main/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://github.com/acme/widget/blob/main");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ConverterConfig::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, crate::ConvertError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_zero_wordwrap_disables_wrapping() {
        let config = ConverterConfig::builder().wordwrap(Some(0)).build().unwrap();
        assert_eq!(config.wordwrap(), None);
    }
}
