//! CSV descriptor breakdown.
//!
//! One row per descriptor, largest count first:
//! `Front,Count,Percentage`.

use super::write_atomic;
use crate::aggregator::Statistics;
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

const CSV_HEADER: &str = "Front,Count,Percentage";

/// Render the descriptor breakdown as CSV
pub fn fronts_to_csv(stats: &Statistics) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in stats.front_shares() {
        out.push_str(&format!("{},{},{}\n", escape_field(&row.key), row.count, row.percentage));
    }
    out
}

/// Write the descriptor breakdown to a CSV file
pub fn write_fronts_csv(stats: &Statistics, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing descriptor breakdown to: {}", output_path.display());
    write_atomic(output_path, fronts_to_csv(stats).as_bytes())
}

/// **Private** - quote fields that would break the row
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn stats() -> Statistics {
        let mut by_front = BTreeMap::new();
        by_front.insert("LORDS_75".to_string(), 1);
        by_front.insert("MYSTERY_ASSET".to_string(), 3);
        let mut by_category = BTreeMap::new();
        by_category.insert("erc20".to_string(), 1);
        by_category.insert("mystery".to_string(), 3);
        Statistics {
            total: 4,
            excluded: 0,
            by_category,
            by_front,
        }
    }

    #[test]
    fn test_csv_rows() {
        assert_eq!(
            fronts_to_csv(&stats()),
            "Front,Count,Percentage\nMYSTERY_ASSET,3,75.00\nLORDS_75,1,25.00\n"
        );
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("A,B"), "\"A,B\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("LORDS_1"), "LORDS_1");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fronts.csv");
        write_fronts_csv(&stats(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(CSV_HEADER));
        assert_eq!(contents.lines().count(), 3);
    }
}
