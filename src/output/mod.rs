//! Output writers for drop artifacts.
//!
//! This module handles writing data to disk in various formats:
//! - JSON leaf datasets and statistics reports
//! - CSV descriptor breakdowns
//! - Terminal summaries
//!
//! Files are written to a sibling temporary file which is flushed and then
//! renamed over the destination, so a failed run never leaves a partial file.

pub mod csv;
pub mod json;
pub mod schema;
pub mod terminal;

// Re-export main functions
pub use csv::{fronts_to_csv, write_fronts_csv};
pub use json::{
    dataset_to_string, read_dataset, statistics_to_string, write_calldata, write_dataset,
    write_statistics,
};
pub use schema::{DropDataset, StatisticsReport};
pub use terminal::{render_dataset_summary, render_statistics};

use crate::utils::error::OutputError;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write bytes to `path` through a temporary sibling file
///
/// **Public** - shared by every writer in this module
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, directory, or parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write or rename
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    validate_output_path(path)?;
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);
    debug!("Writing temporary file: {}", temp_path.display());

    let result = write_and_rename(&temp_path, path, contents);
    if result.is_err() {
        // Best effort, the original error is what the caller needs
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// **Private** - write, flush and move into place
fn write_and_rename(temp_path: &Path, path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let mut file = File::create(temp_path)?;
    file.write_all(contents)?;
    file.flush()?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, path)?;
    Ok(())
}

/// **Private** - `out.json` becomes `out.json.tmp` in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if path.file_name().is_none() {
        return Err(OutputError::InvalidPath(format!(
            "Path has no file name: {}",
            path.display()
        )));
    }

    Ok(())
}

/// **Private** - create missing parent directories
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
