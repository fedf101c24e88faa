//! Dataset assembly.
//!
//! Drives the per-entry pipeline over a card list: parse the descriptor,
//! normalize the recipient, build the leaf. Statistics are folded from the
//! same parsed descriptors, so the two outputs always describe the same set.

use crate::aggregator::{Statistics, StatisticsAggregator};
use crate::config::DropConfig;
use crate::leaf::{LeafBuilder, LeafEntry, LeafLayout};
use crate::parser::address::normalize_address;
use crate::parser::descriptor::parse_descriptor;
use crate::parser::schema::RawEntry;
use crate::utils::error::{DatasetError, LeafError};
use log::{debug, info};

/// Leaves and statistics of one run, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDataset {
    pub layout: LeafLayout,
    pub leaves: Vec<LeafEntry>,
    pub statistics: Statistics,
}

impl AssembledDataset {
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

/// Build every leaf of a card list
///
/// **Public** - main entry point for leaf generation
///
/// Entries are processed strictly in order and the leaf index is the input
/// position. The first failing entry aborts the run.
///
/// # Arguments
/// * `entries` - Card list in input order
/// * `config` - Layout and token table for this run
///
/// # Returns
/// All leaves plus the statistics over their descriptors
///
/// # Errors
/// * `DatasetError::EmptyDataset` - no entries
/// * `DatasetError::Entry` - first entry that fails to parse, normalize or build
pub fn assemble(entries: &[RawEntry], config: &DropConfig) -> Result<AssembledDataset, DatasetError> {
    if entries.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    info!(
        "Assembling {} entries with layout {}",
        entries.len(),
        config.layout
    );

    let builder = LeafBuilder::new(config.layout, &config.tokens);
    let mut aggregator = StatisticsAggregator::new();
    let mut leaves = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let leaf = build_entry(&builder, index, entry, &mut aggregator).map_err(|source| {
            DatasetError::Entry {
                index,
                address: entry.address.clone(),
                front: entry.front.clone(),
                source,
            }
        })?;
        leaves.push(leaf);
    }

    let statistics = aggregator.finish()?;
    debug!("Assembly complete: {}", statistics.summary());

    Ok(AssembledDataset {
        layout: config.layout,
        leaves,
        statistics,
    })
}

/// **Private** - one entry through parse, normalize and build
fn build_entry(
    builder: &LeafBuilder<'_>,
    index: usize,
    entry: &RawEntry,
    aggregator: &mut StatisticsAggregator,
) -> Result<LeafEntry, LeafError> {
    let descriptor = parse_descriptor(&entry.front, builder.tokens())?;
    let recipient = normalize_address(&entry.address)?;
    let leaf = builder.build(recipient, index as u64, &descriptor)?;
    aggregator.record(&entry.front, &descriptor);
    Ok(leaf)
}
