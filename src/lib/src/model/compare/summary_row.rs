use serde::Serialize;

use crate::model::compare::MatchStatus;
use crate::model::CellValue;

/// Per key comparison result for a key present in both tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: CellValue,
    pub total_columns: usize,
    pub matched_columns: usize,
    pub mismatched_columns: usize,
    pub match_percentage: f64,
    pub status: MatchStatus,
}

impl SummaryRow {
    pub fn new(key: CellValue, total_columns: usize, mismatched_columns: usize) -> SummaryRow {
        let matched_columns = total_columns - mismatched_columns;
        SummaryRow {
            key,
            total_columns,
            matched_columns,
            mismatched_columns,
            match_percentage: match_percentage(total_columns, mismatched_columns),
            status: MatchStatus::from_mismatches(mismatched_columns),
        }
    }
}

/// Share of matching columns as a percentage rounded to two decimals.
/// A key with nothing to compare besides itself is a full match.
pub fn match_percentage(total_columns: usize, mismatched_columns: usize) -> f64 {
    if total_columns == 0 {
        return 100.0;
    }
    let matched = (total_columns - mismatched_columns) as f64;
    let pct = matched / total_columns as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
