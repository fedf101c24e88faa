//! Merkle Drop Prep CLI
//!
//! Builds merkle-drop leaf datasets and reward statistics from a card list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use merkle_drop_prep::aggregator::MalformedPolicy;
use merkle_drop_prep::commands::{
    display_schema, display_version, execute_format, execute_mystery_pool, execute_stats,
    validate_dataset_file, FormatArgs, MysteryPoolArgs, StatsArgs,
};
use merkle_drop_prep::leaf::LeafLayout;
use merkle_drop_prep::utils::config::SAMPLE_LEAVES;

/// Merkle Drop Prep - leaf datasets for Starknet claim contracts
#[derive(Parser, Debug)]
#[command(name = "merkle-drop")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the leaf dataset for a card list
    Format {
        /// YAML card list
        #[arg(short, long)]
        input: PathBuf,

        /// Drop config (TOML)
        #[arg(short, long, env = "MERKLE_DROP_CONFIG")]
        config: Option<PathBuf>,

        /// Leaf layout: symbol_qualified or typed_token_address
        #[arg(short, long)]
        layout: Option<LeafLayout>,

        /// Output path for the JSON dataset
        #[arg(short, long, default_value = "leaves.json")]
        output: PathBuf,

        /// Also write the statistics report
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Print a summary with the first leaves
        #[arg(long)]
        summary: bool,

        /// Leaves shown in the summary
        #[arg(long, default_value_t = SAMPLE_LEAVES)]
        sample: usize,
    },

    /// Show category statistics for a card list
    Stats {
        /// YAML card list
        #[arg(short, long)]
        input: PathBuf,

        /// Drop config (TOML)
        #[arg(short, long, env = "MERKLE_DROP_CONFIG")]
        config: Option<PathBuf>,

        /// Exclude malformed descriptors instead of failing
        #[arg(long)]
        exclude_malformed: bool,

        /// Write the JSON report
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the CSV breakdown
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Descriptor rows shown in the terminal
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Compile the mystery reward pool into contract calldata
    MysteryPool {
        /// Drop config (TOML) with [[mystery_pool]] entries
        #[arg(short, long, env = "MERKLE_DROP_CONFIG")]
        config: PathBuf,

        /// Output path for the calldata JSON (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compile a single slot update
        #[arg(long)]
        slot: Option<usize>,
    },

    /// Validate a leaf dataset JSON file
    Validate {
        /// Path to dataset JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Format {
            input,
            config,
            layout,
            output,
            stats,
            summary,
            sample,
        } => {
            execute_format(FormatArgs {
                input,
                config,
                layout,
                output,
                stats_output: stats,
                sample,
                print_summary: summary,
            })?;
        }

        Commands::Stats {
            input,
            config,
            exclude_malformed,
            json,
            csv,
            top,
        } => {
            let policy = if exclude_malformed {
                MalformedPolicy::Exclude
            } else {
                MalformedPolicy::Reject
            };
            execute_stats(StatsArgs {
                input,
                config,
                policy,
                json_output: json,
                csv_output: csv,
                top,
            })?;
        }

        Commands::MysteryPool {
            config,
            output,
            slot,
        } => {
            execute_mystery_pool(MysteryPoolArgs {
                config,
                output,
                slot,
            })?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
