use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;

/// Make sure `output_dir` is a usable directory.
///
/// A missing directory is created, but only one level deep: its parent must
/// already exist. A regular file in its place is a fatal error.
pub fn ensure_output_dir(output_dir: &Path) -> Result<(), ProcessError> {
    check_output_dir(output_dir)?;
    if output_dir.exists() {
        return Ok(());
    }

    fs::create_dir(output_dir).map_err(|source| ProcessError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    info!("Created output directory {}", output_dir.display());
    Ok(())
}

/// Fail when `output_dir` exists as something other than a directory.
///
/// A missing directory passes; it is created on the first write.
pub fn check_output_dir(output_dir: &Path) -> Result<(), ProcessError> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(ProcessError::OutputNotDirectory {
            path: output_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Write translated code to `path` inside `output_dir`, replacing any existing file.
pub fn save_code(code: &str, output_dir: &Path, path: &Path) -> Result<PathBuf, ProcessError> {
    ensure_output_dir(output_dir)?;

    fs::write(path, code).map_err(|source| ProcessError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", code.len(), path.display());

    println!("Saved code to '{}'.", path.display());
    Ok(path.to_path_buf())
}

/// Read a source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, ProcessError> {
    fs::read_to_string(path).map_err(|source| ProcessError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}
