//! Aggregation of card data into review statistics.
//!
//! This module folds parsed descriptors into:
//! - Per-category counts (`erc20`, `mystery`)
//! - Per-descriptor counts
//! - Display percentages over the whole set

pub mod statistics;
pub mod survey;

// Re-export main types and functions
pub use statistics::{aggregate, MalformedPolicy, ShareRow, Statistics, StatisticsAggregator};
pub use survey::survey_fronts;
