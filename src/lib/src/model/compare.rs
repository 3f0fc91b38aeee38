pub mod compare_report;
pub mod compare_result;
pub mod match_status;
pub mod mismatch_row;
pub mod missing_row;
pub mod summary_row;

pub use crate::model::compare::compare_report::{CompareReport, CompareReportView};
pub use crate::model::compare::compare_result::{CompareCounts, CompareResult};
pub use crate::model::compare::match_status::MatchStatus;
pub use crate::model::compare::mismatch_row::MismatchRow;
pub use crate::model::compare::missing_row::{MissingRow, PresentIn};
pub use crate::model::compare::summary_row::SummaryRow;
