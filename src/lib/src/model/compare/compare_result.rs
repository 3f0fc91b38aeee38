use serde::Serialize;

use crate::model::compare::{MatchStatus, MismatchRow, MissingRow, PresentIn, SummaryRow};

/// Everything produced by comparing two tables. Each sequence is in sorted
/// key order, the reporter decides its own ordering.
#[derive(Debug, Clone, Serialize)]
pub struct CompareResult {
    pub left_name: String,
    pub right_name: String,
    pub key_column: String,
    pub columns: Vec<String>,
    pub summary: Vec<SummaryRow>,
    pub mismatches: Vec<MismatchRow>,
    pub missing: Vec<MissingRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompareCounts {
    pub num_keys: usize,
    pub num_columns: usize,
    pub num_match_keys: usize,
    pub num_mismatch_keys: usize,
    pub num_mismatch_cells: usize,
    pub num_left_only_keys: usize,
    pub num_right_only_keys: usize,
}

impl CompareResult {
    pub fn counts(&self) -> CompareCounts {
        let num_match_keys = self
            .summary
            .iter()
            .filter(|row| row.status == MatchStatus::Match)
            .count();
        let num_left_only_keys = self
            .missing
            .iter()
            .filter(|row| row.side == PresentIn::Left)
            .count();

        CompareCounts {
            num_keys: self.summary.len() + self.missing.len(),
            num_columns: self.columns.len(),
            num_match_keys,
            num_mismatch_keys: self.summary.len() - num_match_keys,
            num_mismatch_cells: self.mismatches.len(),
            num_left_only_keys,
            num_right_only_keys: self.missing.len() - num_left_only_keys,
        }
    }

    pub fn is_identical(&self) -> bool {
        self.mismatches.is_empty() && self.missing.is_empty()
    }

    /// Summary rows ordered worst match first. Ties keep key order.
    pub fn summary_by_match_percentage(&self) -> Vec<&SummaryRow> {
        let mut rows: Vec<&SummaryRow> = self.summary.iter().collect();
        rows.sort_by(|a, b| a.match_percentage.total_cmp(&b.match_percentage));
        rows
    }
}
