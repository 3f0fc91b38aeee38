//! libtabcompare
//!
//! Compare two tabular files (csv or xlsx) row by row on a shared key column
//! and write the differences to a formatted xlsx report.
//!
//! # Examples
//!
//! Compare two files and save the report in `reports/`:
//!
//! ```no_run
//! use libtabcompare::command;
//! use libtabcompare::opts::CompareOpts;
//!
//! let opts = CompareOpts::new("before.csv", "after.xlsx", "player_id")
//!     .with_output_dir("reports");
//! let report = command::compare(&opts)?;
//! println!("Wrote {:?}", report.output_path);
//! # Ok::<(), libtabcompare::error::TabCompareError>(())
//! ```
//!
//! Compare tables that are already in memory:
//!
//! ```
//! use libtabcompare::model::{CellValue, Table};
//! use libtabcompare::repositories;
//!
//! let mut left = Table::new("left", vec!["id".to_string(), "score".to_string()])
//!     .with_numeric_columns(&["id", "score"]);
//! left.push_row(vec![CellValue::Int(1), CellValue::Int(10)]);
//!
//! let mut right = Table::new("right", vec!["id".to_string(), "score".to_string()])
//!     .with_numeric_columns(&["id", "score"]);
//! right.push_row(vec![CellValue::Int(1), CellValue::Int(12)]);
//!
//! let result = repositories::compare(&left, &right, "id")?;
//! assert_eq!(result.mismatches[0].difference, Some(2.0));
//! # Ok::<(), libtabcompare::error::TabCompareError>(())
//! ```

pub mod command;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod opts;
pub mod repositories;
pub mod test;
pub mod util;
