pub mod config;
pub mod content_saver;
pub mod error;
pub mod text_converter;
pub mod utils;

use std::path::PathBuf;

pub use config::{ConvertOptions, ConverterConfig, ConverterConfigBuilder};
pub use content_saver::{read_source, save_text_content};
pub use error::{ConvertError, Result};
pub use text_converter::{convert_html, convert_markdown, create_converter, render_markdown};

/// Read the configured Markdown file, convert it and save the text file.
///
/// Returns the path written.
///
/// # Errors
///
/// Fails if the source cannot be read or the output cannot be written; in
/// the latter case an existing output file is left as it was.
pub fn run(config: &ConverterConfig) -> Result<PathBuf> {
    let markdown = read_source(config.input_path())?;
    let text = convert_markdown(&markdown, config.options())?;
    save_text_content(&text, config.output_path())?;

    log::info!(
        "Converted {} into {}",
        config.input_path().display(),
        config.output_path().display()
    );
    Ok(config.output_path().to_path_buf())
}
