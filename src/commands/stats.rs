//! Stats command implementation.
//!
//! Surveys the descriptors of a card list without building leaves, so it
//! needs no layout and ignores recipient addresses.

use super::models::StatsArgs;
use super::utils::ensure_input_exists;
use crate::aggregator::{survey_fronts, MalformedPolicy};
use crate::config::resolve_token_table;
use crate::output::{render_statistics, write_fronts_csv, write_statistics};
use crate::parser::load_cards;
use anyhow::{Context, Result};
use colored::*;

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    ensure_input_exists(&args.input)?;

    let tokens = resolve_token_table(args.config.as_deref())
        .context("Failed to resolve token table")?;
    let entries = load_cards(&args.input)
        .with_context(|| format!("Failed to load cards from {}", args.input.display()))?;

    let stats = survey_fronts(&entries, &tokens, args.policy)
        .context("Failed to aggregate statistics")?;

    println!("{}", render_statistics(&stats, args.top));

    if args.policy == MalformedPolicy::Exclude && stats.excluded > 0 {
        println!(
            "{}",
            format!("⚠️  {} malformed entries excluded", stats.excluded)
                .yellow()
                .bold()
        );
    }

    if let Some(path) = &args.json_output {
        write_statistics(&stats, path)
            .with_context(|| format!("Failed to write statistics to {}", path.display()))?;
    }

    if let Some(path) = &args.csv_output {
        write_fronts_csv(&stats, path)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    }

    Ok(())
}
