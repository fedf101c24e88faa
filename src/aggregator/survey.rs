//! Descriptor survey for operator review.
//!
//! Reads only the reward descriptors, so it runs before any leaf layout is
//! chosen. Unlike leaf generation it may exclude malformed entries, and
//! reports how many it left out.

use super::statistics::{MalformedPolicy, Statistics, StatisticsAggregator};
use crate::config::TokenTable;
use crate::parser::descriptor::parse_descriptor;
use crate::parser::schema::RawEntry;
use crate::utils::error::{DatasetError, LeafError};
use log::{debug, warn};

/// Aggregate descriptor statistics over a card list
///
/// **Public** - entry point for the stats command
///
/// # Arguments
/// * `entries` - Card list in input order
/// * `tokens` - Symbol table for this run
/// * `policy` - Whether a bad descriptor aborts or is excluded
///
/// # Errors
/// * `DatasetError::EmptyDataset` - no entries
/// * `DatasetError::Entry` - a bad descriptor under `MalformedPolicy::Reject`
pub fn survey_fronts(
    entries: &[RawEntry],
    tokens: &TokenTable,
    policy: MalformedPolicy,
) -> Result<Statistics, DatasetError> {
    if entries.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let mut aggregator = StatisticsAggregator::new();

    for (index, entry) in entries.iter().enumerate() {
        match parse_descriptor(&entry.front, tokens) {
            Ok(descriptor) => aggregator.record(&entry.front, &descriptor),
            Err(err) if policy == MalformedPolicy::Exclude => {
                warn!("Excluding entry {} ({:?}): {}", index, entry.front, err);
                aggregator.record_excluded(&entry.front);
            }
            Err(err) => {
                return Err(DatasetError::Entry {
                    index,
                    address: entry.address.clone(),
                    front: entry.front.clone(),
                    source: LeafError::Descriptor(err),
                })
            }
        }
    }

    let stats = aggregator.finish()?;
    debug!("Survey complete: {}", stats.summary());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    fn entries() -> Vec<RawEntry> {
        vec![
            RawEntry::new("0x1", "LORDS_75000000000000000000"),
            RawEntry::new("0x2", "GARBAGE"),
            RawEntry::new("0x3", "MYSTERY_ASSET"),
        ]
    }

    #[test]
    fn test_reject_policy_stops_at_bad_entry() {
        let err = survey_fronts(&entries(), &TokenTable::builtin(), MalformedPolicy::Reject)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDescriptor);
        assert_eq!(err.entry_index(), Some(1));
    }

    #[test]
    fn test_exclude_policy_reports_exclusions() {
        let stats = survey_fronts(&entries(), &TokenTable::builtin(), MalformedPolicy::Exclude)
            .unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.count_for_category("erc20"), 1);
        assert_eq!(stats.count_for_category("mystery"), 1);
        assert_eq!(
            stats.by_category.values().sum::<u64>(),
            stats.total - stats.excluded
        );
    }

    #[test]
    fn test_survey_ignores_addresses() {
        let entries = vec![RawEntry::new("not-an-address", "NUMS_1")];
        let stats =
            survey_fronts(&entries, &TokenTable::builtin(), MalformedPolicy::Reject).unwrap();
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn test_empty_survey_fails() {
        let err = survey_fronts(&[], &TokenTable::builtin(), MalformedPolicy::Exclude)
            .unwrap_err();
        assert_eq!(err, DatasetError::EmptyDataset);
    }
}
