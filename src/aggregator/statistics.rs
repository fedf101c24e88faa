//! Category statistics over a card list.
//!
//! Counts are the stored values; percentages are derived for display only.

use crate::parser::schema::ParsedDescriptor;
use crate::utils::error::StatsError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with an entry whose descriptor does not parse
///
/// Chosen by the caller. Leaf generation always rejects; the read-only
/// survey may exclude and report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    #[default]
    Reject,
    Exclude,
}

/// Aggregated counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Entries seen, including excluded ones
    pub total: u64,

    /// Entries left out of the breakdowns
    pub excluded: u64,

    /// Included entries per category (`erc20`, `mystery`)
    pub by_category: BTreeMap<String, u64>,

    /// Included entries per descriptor string
    pub by_front: BTreeMap<String, u64>,
}

/// One row of a breakdown, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRow {
    pub key: String,
    pub count: u64,

    /// `count / total * 100` with two decimals
    pub percentage: String,
}

impl Statistics {
    /// Entries that made it into the breakdowns
    pub fn included(&self) -> u64 {
        self.total.saturating_sub(self.excluded)
    }

    pub fn unique_fronts(&self) -> usize {
        self.by_front.len()
    }

    pub fn count_for_category(&self, category: &str) -> u64 {
        self.by_category.get(category).copied().unwrap_or(0)
    }

    /// Share of `total` in percent
    pub fn percentage(&self, count: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (count as f64 / self.total as f64) * 100.0
    }

    pub fn format_percentage(&self, count: u64) -> String {
        format!("{:.2}", self.percentage(count))
    }

    /// Category rows, largest first
    pub fn category_shares(&self) -> Vec<ShareRow> {
        self.shares(&self.by_category)
    }

    /// Descriptor rows, largest first
    pub fn front_shares(&self) -> Vec<ShareRow> {
        self.shares(&self.by_front)
    }

    fn shares(&self, counts: &BTreeMap<String, u64>) -> Vec<ShareRow> {
        let mut rows: Vec<ShareRow> = counts
            .iter()
            .map(|(key, &count)| ShareRow {
                key: key.clone(),
                count,
                percentage: self.format_percentage(count),
            })
            .collect();
        // BTreeMap order breaks ties, so the sort is stable and deterministic
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        let categories: Vec<String> = self
            .by_category
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!(
            "Total: {} | Excluded: {} | Unique fronts: {} | {}",
            self.total,
            self.excluded,
            self.unique_fronts(),
            categories.join(" ")
        )
    }
}

/// Fold of descriptors into `Statistics`
#[derive(Debug, Default)]
pub struct StatisticsAggregator {
    stats: Statistics,
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an included entry
    pub fn record(&mut self, front: &str, descriptor: &ParsedDescriptor) {
        self.stats.total += 1;
        *self
            .stats
            .by_category
            .entry(descriptor.item_type.as_str().to_string())
            .or_insert(0) += 1;
        *self.stats.by_front.entry(front.to_string()).or_insert(0) += 1;
    }

    /// Count an entry that is left out of the breakdowns
    pub fn record_excluded(&mut self, front: &str) {
        debug!("Excluding descriptor from statistics: {:?}", front);
        self.stats.total += 1;
        self.stats.excluded += 1;
    }

    /// Finish the fold
    ///
    /// # Errors
    /// * `StatsError::EmptyDataset` - nothing was recorded, so no percentage exists
    pub fn finish(self) -> Result<Statistics, StatsError> {
        if self.stats.total == 0 {
            return Err(StatsError::EmptyDataset);
        }
        Ok(self.stats)
    }
}

/// Aggregate a full sequence of parsed descriptors
///
/// **Public** - convenience over `StatisticsAggregator`
pub fn aggregate(
    descriptors: &[ParsedDescriptor],
    mystery_literal: &str,
) -> Result<Statistics, StatsError> {
    let mut aggregator = StatisticsAggregator::new();
    for descriptor in descriptors {
        aggregator.record(&descriptor.to_front(mystery_literal), descriptor);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::ItemType;
    use pretty_assertions::assert_eq;

    fn token(symbol: &str, amount: &str) -> ParsedDescriptor {
        ParsedDescriptor {
            item_type: ItemType::Erc20,
            token_symbol: Some(symbol.to_string()),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_aggregate_counts() {
        let descriptors = vec![
            token("LORDS", "75"),
            token("LORDS", "75"),
            token("NUMS", "2000"),
            ParsedDescriptor::mystery(),
        ];

        let stats = aggregate(&descriptors, "MYSTERY_ASSET").unwrap();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.excluded, 0);
        assert_eq!(stats.count_for_category("erc20"), 3);
        assert_eq!(stats.count_for_category("mystery"), 1);
        assert_eq!(stats.by_front.get("LORDS_75"), Some(&2));
        assert_eq!(stats.by_front.get("MYSTERY_ASSET"), Some(&1));
        assert_eq!(stats.by_category.values().sum::<u64>(), stats.total);
    }

    #[test]
    fn test_empty_dataset_fails() {
        assert_eq!(aggregate(&[], "MYSTERY_ASSET"), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_excluded_entries_count_toward_total_only() {
        let mut aggregator = StatisticsAggregator::new();
        aggregator.record("LORDS_1", &token("LORDS", "1"));
        aggregator.record_excluded("GARBAGE");
        let stats = aggregator.finish().unwrap();

        assert_eq!(stats.total, 2);
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.included(), 1);
        assert_eq!(
            stats.by_category.values().sum::<u64>(),
            stats.total - stats.excluded
        );
        assert_eq!(stats.format_percentage(1), "50.00");
    }

    #[test]
    fn test_only_excluded_is_not_empty() {
        let mut aggregator = StatisticsAggregator::new();
        aggregator.record_excluded("GARBAGE");
        let stats = aggregator.finish().unwrap();
        assert_eq!(stats.included(), 0);
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn test_included_saturates_on_inconsistent_counts() {
        let stats: Statistics = serde_json::from_str(
            r#"{"total": 1, "excluded": 3, "by_category": {}, "by_front": {}}"#,
        )
        .unwrap();
        assert_eq!(stats.included(), 0);
    }

    #[test]
    fn test_shares_sorted_by_count_then_key() {
        let descriptors = vec![
            token("PAPER", "3"),
            token("LORDS", "1"),
            token("NUMS", "2"),
            token("NUMS", "2"),
        ];
        let stats = aggregate(&descriptors, "MYSTERY_ASSET").unwrap();
        let rows = stats.front_shares();

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["NUMS_2", "LORDS_1", "PAPER_3"]);
        assert_eq!(rows[0].percentage, "50.00");
        assert_eq!(rows[1].percentage, "25.00");
    }

    #[test]
    fn test_percentage_two_decimals() {
        let descriptors = vec![
            token("LORDS", "1"),
            token("LORDS", "1"),
            ParsedDescriptor::mystery(),
        ];
        let stats = aggregate(&descriptors, "MYSTERY_ASSET").unwrap();
        let rows = stats.category_shares();
        assert_eq!(rows[0].key, "erc20");
        assert_eq!(rows[0].percentage, "66.67");
        assert_eq!(rows[1].percentage, "33.33");
    }
}
