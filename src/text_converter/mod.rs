//! Markdown to plain text conversion pipeline
//!
//! 1. Render Markdown to HTML (`pulldown-cmark`)
//! 2. Parse the HTML and walk it with the README formatters installed
//!
//! # Usage
//!
//! ```rust
//! # use readme2txt::{convert_markdown, ConvertOptions};
//! let text = convert_markdown("## Usage\n\nRun it.\n", &ConvertOptions::default())?;
//! assert_eq!(text, "Usage\n=====\n\nRun it.");
//! # Ok::<(), readme2txt::ConvertError>(())
//! ```

pub mod custom_handlers;
pub mod html_text;
pub mod markdown_rendering;

use crate::config::ConvertOptions;
use crate::error::Result;

pub use custom_handlers::create_converter;
pub use markdown_rendering::render_markdown;

/// Convert rendered HTML to the README text format
///
/// # Errors
///
/// Returns an error if the HTML parser sink fails.
pub fn convert_html(html: &str, options: &ConvertOptions) -> Result<String> {
    create_converter(options).convert(html)
}

/// Render Markdown and convert the result to the README text format
///
/// # Errors
///
/// Returns an error if the HTML parser sink fails.
pub fn convert_markdown(markdown: &str, options: &ConvertOptions) -> Result<String> {
    let html = render_markdown(markdown);
    convert_html(&html, options)
}
