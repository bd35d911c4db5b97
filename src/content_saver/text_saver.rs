use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ConvertError, Result};

/// Save text to `path`, replacing any existing file atomically
///
/// The content goes to a temporary file in the destination directory, which
/// is renamed over `path` only after every byte is written. On failure the
/// temporary file is removed and an existing `path` is left untouched.
///
/// # Errors
///
/// Returns [`ConvertError::WriteOutput`] if the temporary file cannot be
/// created or written, or the rename fails.
pub fn save_text_content(text: &str, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    // A bare file name has an empty parent
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_error)?;
    temp_file.write_all(text.as_bytes()).map_err(write_error)?;
    temp_file.flush().map_err(write_error)?;

    // Atomic rename to final path
    temp_file
        .persist(path)
        .map_err(|e| write_error(e.error))?;

    log::debug!("Saved {} bytes to {}", text.len(), path.display());
    Ok(())
}
