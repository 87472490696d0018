//! Summary statistics over a loaded table

pub mod stats;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Table;

/// Fixed-shape statistical digest of a Table.
///
/// `numeric_means` only carries columns whose every value is numeric and
/// that have at least one non-missing cell; `missing_counts` carries every
/// column. Both maps iterate in source column order.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_entries: usize,
    pub columns: Vec<String>,
    pub numeric_means: IndexMap<String, f64>,
    pub missing_counts: IndexMap<String, usize>,
}

/// Compute the summary for a table. Total: every table, including the
/// zero-row and zero-column cases, has a summary.
pub fn summarize(table: &Table) -> Summary {
    let total_entries = table.row_count();
    let columns: Vec<String> = table.columns.iter().map(|c| c.name.clone()).collect();

    let mut numeric_means = IndexMap::new();
    let mut missing_counts = IndexMap::new();

    for column in &table.columns {
        let missing = table
            .column_values(column.index)
            .filter(|cell| cell.is_null())
            .count();
        missing_counts.insert(column.name.clone(), missing);

        if column.inferred_type.is_numeric() {
            if let Some(mean) = stats::mean(table.column_values(column.index)) {
                numeric_means.insert(column.name.clone(), stats::round2(mean));
            }
        }
    }

    log::debug!(
        "summarized {} rows, {} numeric columns",
        total_entries,
        numeric_means.len()
    );

    Summary {
        total_entries,
        columns,
        numeric_means,
        missing_counts,
    }
}
