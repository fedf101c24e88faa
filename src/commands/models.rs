use crate::aggregator::MalformedPolicy;
use crate::leaf::LeafLayout;
use crate::utils::config::SAMPLE_LEAVES;
use std::path::PathBuf;

/// Arguments for the format command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct FormatArgs {
    /// YAML card list
    pub input: PathBuf,

    /// Drop config (TOML), built-in token table when absent
    pub config: Option<PathBuf>,

    /// Layout override, wins over the config file
    pub layout: Option<LeafLayout>,

    /// Output path for the JSON leaf dataset
    pub output: PathBuf,

    /// Also write the statistics report here
    pub stats_output: Option<PathBuf>,

    /// Leaves shown in the terminal summary
    pub sample: usize,

    /// Print the terminal summary
    pub print_summary: bool,
}

impl Default for FormatArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("cards.yaml"),
            config: None,
            layout: None,
            output: PathBuf::from("leaves.json"),
            stats_output: None,
            sample: SAMPLE_LEAVES,
            print_summary: false,
        }
    }
}

/// Arguments for the stats command
#[derive(Debug, Clone)]
pub struct StatsArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,

    /// Reject or exclude entries whose descriptor does not parse
    pub policy: MalformedPolicy,

    /// JSON report path
    pub json_output: Option<PathBuf>,

    /// CSV breakdown path
    pub csv_output: Option<PathBuf>,

    /// Descriptor rows shown in the terminal
    pub top: usize,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("cards.yaml"),
            config: None,
            policy: MalformedPolicy::Reject,
            json_output: None,
            csv_output: None,
            top: 20,
        }
    }
}

/// Arguments for the mystery-pool command
#[derive(Debug, Clone)]
pub struct MysteryPoolArgs {
    /// Drop config holding `[[mystery_pool]]` slots
    pub config: PathBuf,

    /// Write the calldata array here instead of stdout
    pub output: Option<PathBuf>,

    /// Compile a single slot update instead of the whole pool
    pub slot: Option<usize>,
}
