//! Getter methods for `ConverterConfig`

use std::path::Path;

use super::types::{ConvertOptions, ConverterConfig};

impl ConverterConfig {
    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    #[must_use]
    pub fn wordwrap(&self) -> Option<usize> {
        self.options.wordwrap
    }
}
