//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod format;
pub mod models;
pub mod mystery;
pub mod stats;
pub mod utils;

// Re-export main command functions
pub use format::execute_format;
pub use models::{FormatArgs, MysteryPoolArgs, StatsArgs};
pub use mystery::execute_mystery_pool;
pub use stats::execute_stats;
pub use utils::{display_schema, display_version, validate_dataset_file};
