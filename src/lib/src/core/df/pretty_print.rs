//! # Pretty Print
//!
//! Terminal tables for schemas and compare results.
//!
//! ```text
//! +----+-----------+-------+---------+
//! | id | name      | dtype | numeric |
//! +==================================+
//! | 0  | player_id | i64   | true    |
//! +----+-----------+-------+---------+
//! ```

use polars::prelude::Field;

use crate::core::df::tabular;
use crate::model::{CompareCounts, CompareResult, SummaryRow};

pub fn fields_to_str(fields: &[Field]) -> String {
    let mut table = comfy_table::Table::new();
    table.set_header(vec!["id", "name", "dtype", "numeric"]);

    for (i, field) in fields.iter().enumerate() {
        let mut cells: Vec<comfy_table::Cell> = vec![];
        cells.push(comfy_table::Cell::from(format!("{i}")));
        cells.push(comfy_table::Cell::from(field.name().to_string()));
        cells.push(comfy_table::Cell::from(field.dtype().to_string()));
        cells.push(comfy_table::Cell::from(format!(
            "{}",
            tabular::is_numeric_dtype(field.dtype())
        )));
        table.add_row(cells);
    }

    table.to_string()
}

pub fn counts_to_str(result: &CompareResult, counts: &CompareCounts) -> String {
    let mut table = comfy_table::Table::new();
    table.set_header(vec!["", "count"]);
    table.add_row(vec!["keys".to_string(), counts.num_keys.to_string()]);
    table.add_row(vec!["columns".to_string(), counts.num_columns.to_string()]);
    table.add_row(vec!["matching keys".to_string(), counts.num_match_keys.to_string()]);
    table.add_row(vec![
        "mismatching keys".to_string(),
        counts.num_mismatch_keys.to_string(),
    ]);
    table.add_row(vec![
        "mismatched cells".to_string(),
        counts.num_mismatch_cells.to_string(),
    ]);
    table.add_row(vec![
        format!("only in {}", result.left_name),
        counts.num_left_only_keys.to_string(),
    ]);
    table.add_row(vec![
        format!("only in {}", result.right_name),
        counts.num_right_only_keys.to_string(),
    ]);
    table.to_string()
}

/// The `limit` worst matching keys, worst first.
pub fn worst_matches_to_str(result: &CompareResult, limit: usize) -> String {
    let mut table = comfy_table::Table::new();
    table.set_header(vec!["key", "mismatched", "match %"]);

    let rows: Vec<&SummaryRow> = result
        .summary_by_match_percentage()
        .into_iter()
        .filter(|row| row.mismatched_columns > 0)
        .take(limit)
        .collect();

    for row in rows {
        table.add_row(vec![
            row.key.to_string(),
            format!("{}/{}", row.mismatched_columns, row.total_columns),
            format!("{:.2}", row.match_percentage),
        ]);
    }

    table.to_string()
}
