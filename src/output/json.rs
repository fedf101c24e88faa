//! JSON output writer.
//!
//! Writes leaf datasets, statistics reports and calldata arrays as pretty
//! JSON with a trailing newline.

use super::schema::{DropDataset, StatisticsReport};
use super::write_atomic;
use crate::aggregator::Statistics;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Write a leaf dataset to a JSON file
///
/// **Public** - main entry point for dataset output
///
/// # Arguments
/// * `dataset` - Dataset to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_dataset(dataset: &DropDataset, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing {} leaves to: {}", dataset.leaf_count, output_path.display());

    let contents = dataset_to_string(dataset)?;
    write_atomic(output_path, contents.as_bytes())?;

    info!("Dataset written successfully ({} bytes)", contents.len());
    Ok(())
}

/// Serialize a dataset exactly as `write_dataset` stores it
pub fn dataset_to_string(dataset: &DropDataset) -> Result<String, OutputError> {
    to_pretty_string(dataset)
}

/// Write a statistics report to a JSON file
pub fn write_statistics(stats: &Statistics, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing statistics to: {}", output_path.display());

    write_atomic(output_path, statistics_to_string(stats)?.as_bytes())
}

/// Serialize a statistics report exactly as `write_statistics` stores it
pub fn statistics_to_string(stats: &Statistics) -> Result<String, OutputError> {
    to_pretty_string(&StatisticsReport::from(stats))
}

/// Write a felt calldata array to a JSON file
pub fn write_calldata(calldata: &[String], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing {} calldata felts to: {}", calldata.len(), output_path.display());
    write_atomic(output_path, to_pretty_string(&calldata)?.as_bytes())
}

/// Read a leaf dataset from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dataset(input_path: impl AsRef<Path>) -> Result<DropDataset, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading dataset from: {}", input_path.display());

    let file = File::open(input_path)?;
    let dataset: DropDataset = serde_json::from_reader(BufReader::new(file))?;

    if dataset.version != SCHEMA_VERSION {
        warn!(
            "Dataset schema version {} differs from current {}",
            dataset.version, SCHEMA_VERSION
        );
    }

    debug!(
        "Dataset loaded: version {}, layout {}, {} leaves",
        dataset.version, dataset.layout, dataset.leaf_count
    );
    Ok(dataset)
}

/// **Private** - pretty JSON plus trailing newline
fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    Ok(contents)
}
