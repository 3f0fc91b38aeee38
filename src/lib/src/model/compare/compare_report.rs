use serde::Serialize;
use std::path::PathBuf;

use crate::model::compare::{CompareCounts, CompareResult};

/// A finished comparison and where its report was written.
#[derive(Debug, Clone)]
pub struct CompareReport {
    pub result: CompareResult,
    pub output_path: PathBuf,
}

/// The machine readable view of a [`CompareReport`], without the row data.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReportView {
    pub file_1: String,
    pub file_2: String,
    pub key_column: String,
    pub output_path: PathBuf,
    pub counts: CompareCounts,
}

impl CompareReport {
    pub fn view(&self) -> CompareReportView {
        CompareReportView {
            file_1: self.result.left_name.to_owned(),
            file_2: self.result.right_name.to_owned(),
            key_column: self.result.key_column.to_owned(),
            output_path: self.output_path.to_owned(),
            counts: self.result.counts(),
        }
    }
}
