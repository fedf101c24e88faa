use crate::output::read_dataset;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Fail early with a readable message when an input file is missing
pub fn ensure_input_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("Input file not found: {}", path.display());
    }
    Ok(())
}

/// Validate a leaf dataset JSON file
///
/// Checks the leaf count and that indices run contiguously from zero.
pub fn validate_dataset_file(file_path: PathBuf) -> Result<()> {
    println!("Validating dataset: {}", file_path.display());

    let dataset = read_dataset(&file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    if dataset.leaf_count != dataset.leaves.len() {
        bail!(
            "leaf_count is {} but the file holds {} leaves",
            dataset.leaf_count,
            dataset.leaves.len()
        );
    }

    for (position, leaf) in dataset.leaves.iter().enumerate() {
        if leaf.record.index != position as u64 {
            bail!(
                "Leaf at position {} has index {}",
                position,
                leaf.record.index
            );
        }
        if leaf.record.token_address.is_some() != dataset.layout.embeds_token_address() {
            bail!(
                "Leaf {} does not match layout {}",
                position,
                dataset.layout
            );
        }
    }

    println!("✓ Valid leaf dataset");
    println!("  Version: {}", dataset.version);
    println!("  Layout: {}", dataset.layout);
    println!("  Leaves: {}", dataset.leaf_count);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Merkle Drop Leaf Dataset Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  layout: string           - symbol_qualified | typed_token_address");
        println!("  leaf_count: number       - Number of leaves");
        println!("  leaves: array            - One leaf per recipient, in input order");
        println!("    recipient: string      - Normalized felt hex address");
        println!("    index: number          - Zero-based input position");
        println!("    amount: string         - Exact decimal amount ('0' for mystery)");
        println!("    item_type: string      - Symbol or category, per layout");
        println!("    token_address: string? - Token contract (typed layout only)");
        println!("    preimage: array        - Felt hex values the contract hashes");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("merkle-drop v{}", env!("CARGO_PKG_VERSION"));
    println!("Dataset Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Leaf dataset preparation for Starknet merkle drops.");
}
