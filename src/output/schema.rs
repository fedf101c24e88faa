//! Serialized artifact shapes.
//!
//! These are the documents the tool writes. Field order is serialization
//! order and every map is ordered, so identical input yields identical bytes.

use crate::aggregator::{ShareRow, Statistics};
use crate::dataset::AssembledDataset;
use crate::leaf::{LeafEntry, LeafLayout};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The leaf dataset handed to the tree builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropDataset {
    /// Schema version of this document
    pub version: String,

    /// Layout every leaf was built with
    pub layout: LeafLayout,

    pub leaf_count: usize,

    pub leaves: Vec<LeafEntry>,
}

impl DropDataset {
    pub fn from_assembled(dataset: &AssembledDataset) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            layout: dataset.layout,
            leaf_count: dataset.leaves.len(),
            leaves: dataset.leaves.clone(),
        }
    }
}

/// Statistics document for operator review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub total: u64,
    pub excluded: u64,
    pub unique_fronts: usize,
    pub by_category: BTreeMap<String, u64>,

    /// Category rows, largest first
    pub categories: Vec<ShareRow>,

    /// Descriptor rows, largest first
    pub fronts: Vec<ShareRow>,
}

impl From<&Statistics> for StatisticsReport {
    fn from(stats: &Statistics) -> Self {
        Self {
            total: stats.total,
            excluded: stats.excluded,
            unique_fronts: stats.unique_fronts(),
            by_category: stats.by_category.clone(),
            categories: stats.category_shares(),
            fronts: stats.front_shares(),
        }
    }
}
