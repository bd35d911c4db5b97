use std::path::Path;

use crate::error::{ConvertError, Result};

/// Read the Markdown source as UTF-8
///
/// # Errors
///
/// Returns [`ConvertError::ReadSource`] if the file is missing, unreadable
/// or not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let markdown = std::fs::read_to_string(path).map_err(|source| ConvertError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} bytes from {}", markdown.len(), path.display());
    Ok(markdown)
}
