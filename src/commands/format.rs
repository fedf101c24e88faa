//! Format command implementation.
//!
//! The format command:
//! 1. Resolves the drop config and leaf layout
//! 2. Loads the card list
//! 3. Assembles every leaf, stopping at the first bad entry
//! 4. Writes the statistics, if requested, and then the dataset

use super::models::FormatArgs;
use super::utils::ensure_input_exists;
use crate::config::resolve_config;
use crate::dataset::assemble;
use crate::output::{
    dataset_to_string, render_dataset_summary, statistics_to_string, write_atomic, DropDataset,
};
use crate::parser::load_cards;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the format command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Config or input cannot be loaded
/// * Any entry fails to parse, normalize or build (no file is written)
/// * Output file cannot be written
pub fn execute_format(args: FormatArgs) -> Result<()> {
    let start = Instant::now();
    ensure_input_exists(&args.input)?;

    if let Some(stats_path) = &args.stats_output {
        if same_destination(stats_path, &args.output) {
            bail!(
                "Statistics output {} would overwrite the dataset output",
                stats_path.display()
            );
        }
    }

    let config = resolve_config(args.config.as_deref(), args.layout)
        .context("Failed to resolve drop configuration")?;
    info!("Using leaf layout: {}", config.layout);

    let entries = load_cards(&args.input)
        .with_context(|| format!("Failed to load cards from {}", args.input.display()))?;
    debug!("Loaded {} cards", entries.len());

    let assembled = assemble(&entries, &config).context("Failed to assemble leaf dataset")?;
    let dataset = DropDataset::from_assembled(&assembled);

    // Dataset is committed last; a failed statistics write leaves no dataset
    let dataset_json = dataset_to_string(&dataset).context("Failed to serialize dataset")?;
    let stats_json = match &args.stats_output {
        Some(_) => Some(
            statistics_to_string(&assembled.statistics)
                .context("Failed to serialize statistics")?,
        ),
        None => None,
    };

    if let (Some(path), Some(contents)) = (&args.stats_output, &stats_json) {
        write_atomic(path, contents.as_bytes())
            .with_context(|| format!("Failed to write statistics to {}", path.display()))?;
        info!("Statistics written to: {}", path.display());
    }

    write_atomic(&args.output, dataset_json.as_bytes())
        .with_context(|| format!("Failed to write dataset to {}", args.output.display()))?;
    info!(
        "Dataset written to: {} ({} bytes)",
        args.output.display(),
        dataset_json.len()
    );

    if args.print_summary {
        println!("{}", render_dataset_summary(&dataset, args.sample));
    }

    info!(
        "Formatted {} leaves in {:.2?}",
        dataset.leaf_count,
        start.elapsed()
    );
    println!("✓ Wrote {} leaves to {}", dataset.leaf_count, args.output.display());

    Ok(())
}

/// **Private** - whether two output paths name the same file
fn same_destination(a: &Path, b: &Path) -> bool {
    a == b || resolve_destination(a) == resolve_destination(b)
}

/// **Private** - canonical parent joined with the file name, when resolvable
fn resolve_destination(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(file_name))
}
