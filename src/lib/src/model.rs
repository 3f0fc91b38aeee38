pub mod cell_value;
pub mod compare;
pub mod table;
pub mod tabular_format;

pub use crate::model::cell_value::CellValue;
pub use crate::model::table::{KeyedTable, Table};
pub use crate::model::tabular_format::TabularFormat;

pub use crate::model::compare::{
    CompareCounts, CompareReport, CompareReportView, CompareResult, MatchStatus, MismatchRow,
    MissingRow, PresentIn, SummaryRow,
};
