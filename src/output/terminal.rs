//! Terminal output rendering.
//!
//! Human-readable summaries for the operator, with colour cues for the
//! headline numbers.

use super::schema::DropDataset;
use crate::aggregator::{ShareRow, Statistics};
use colored::*;

const RULE: &str = "---------------------------------------------------\n";

/// Render the statistics of a run
///
/// `top` limits the descriptor table; categories are always shown in full.
pub fn render_statistics(stats: &Statistics, top: usize) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&"Drop Statistics".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!("Total entries:  {}\n", stats.total.to_string().cyan()));
    if stats.excluded > 0 {
        out.push_str(&format!(
            "Excluded:       {}\n",
            stats.excluded.to_string().yellow().bold()
        ));
    }
    out.push_str(&format!("Unique fronts:  {}\n", stats.unique_fronts()));
    out.push_str(RULE);

    out.push_str("\nBy category:\n");
    out.push_str(&render_rows(&stats.category_shares(), usize::MAX));

    out.push_str("\nBy front:\n");
    let fronts = stats.front_shares();
    out.push_str(&render_rows(&fronts, top));
    if fronts.len() > top {
        out.push_str(&format!("  ... {} more\n", fronts.len() - top));
    }

    out
}

/// Render the headline of a generated dataset and its first leaves
pub fn render_dataset_summary(dataset: &DropDataset, sample: usize) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&"Leaf Dataset".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!("Layout:  {}\n", dataset.layout.to_string().cyan()));
    out.push_str(&format!("Leaves:  {}\n", dataset.leaf_count));
    out.push_str(RULE);

    for leaf in dataset.leaves.iter().take(sample) {
        let record = &leaf.record;
        out.push_str(&format!(
            "  #{:<5} {} {} {}",
            record.index, record.recipient, record.item_type, record.amount
        ));
        if let Some(token) = &record.token_address {
            out.push_str(&format!(" {}", token.dimmed()));
        }
        out.push('\n');
    }
    if dataset.leaves.len() > sample {
        out.push_str(&format!("  ... {} more\n", dataset.leaves.len() - sample));
    }

    out
}

fn render_rows(rows: &[ShareRow], limit: usize) -> String {
    let width = rows
        .iter()
        .take(limit)
        .map(|r| r.key.len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .take(limit)
        .map(|row| {
            format!(
                "  {:<width$}  {:>8}  {:>6}%\n",
                row.key,
                row.count,
                row.percentage,
                width = width
            )
        })
        .collect()
}
