//! Writing rendered resumes to disk.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Ensures the output file is safe to write to.
///
/// # Arguments
/// * `output` - Target file path for generated output
/// * `force` - Whether to overwrite an existing file
///
/// # Errors
/// * `Error::OutputExistsError` if the file exists and force is false
pub fn ensure_output_file<P: AsRef<Path>>(output: P, force: bool) -> Result<PathBuf> {
    let output = output.as_ref();
    if output.exists() && !force {
        return Err(Error::OutputExistsError { output: output.display().to_string() });
    }
    Ok(output.to_path_buf())
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_output<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        base_path.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing {}", abs_path.display());
    std::fs::write(abs_path, content).map_err(Error::IoError)
}
