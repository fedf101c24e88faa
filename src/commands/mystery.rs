//! Mystery-pool command implementation.
//!
//! Compiles the configured mystery reward pool into the calldata of the
//! claim contract's pool setters.

use super::models::MysteryPoolArgs;
use crate::config::{compile_pool_calldata, compile_slot_calldata, load_mystery_pool};
use crate::output::write_calldata;
use anyhow::{bail, Context, Result};
use log::info;

/// Execute the mystery-pool command
///
/// **Public** - main entry point called from main.rs
pub fn execute_mystery_pool(args: MysteryPoolArgs) -> Result<()> {
    let pool = load_mystery_pool(&args.config)
        .with_context(|| format!("Failed to load mystery pool from {}", args.config.display()))?;

    if pool.is_empty() {
        bail!("No [[mystery_pool]] entries in {}", args.config.display());
    }

    let calldata = match args.slot {
        Some(index) => {
            let entry = pool.get(index).with_context(|| {
                format!("Slot {} out of range, pool has {} entries", index, pool.len())
            })?;
            info!("Compiling slot {} ({})", index, entry.name);
            compile_slot_calldata(index, entry)
        }
        None => {
            info!("Compiling {} mystery pool entries", pool.len());
            compile_pool_calldata(&pool)
        }
    };

    match &args.output {
        Some(path) => {
            write_calldata(&calldata, path)
                .with_context(|| format!("Failed to write calldata to {}", path.display()))?;
            println!("✓ Wrote {} felts to {}", calldata.len(), path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&calldata)
                .context("Failed to serialize calldata")?;
            println!("{}", json);
        }
    }

    Ok(())
}
