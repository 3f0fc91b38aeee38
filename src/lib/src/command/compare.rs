//! # tabcompare compare
//!
//! Load two tables, compare them on a key column and save the report
//!

use crate::core::df::tabular;
use crate::core::report;
use crate::error::TabCompareError;
use crate::model::{CompareReport, TabularFormat};
use crate::opts::CompareOpts;
use crate::repositories;
use crate::util;

/// Compare `opts.path_1` against `opts.path_2` on `opts.key_column` and
/// write a timestamped xlsx report into `opts.output_dir`.
///
/// Both formats are resolved before anything is read, so an unsupported
/// extension fails fast.
pub fn compare(opts: &CompareOpts) -> Result<CompareReport, TabCompareError> {
    log::info!("Starting file comparison...");

    let format_1 = TabularFormat::from_path(&opts.path_1)?;
    let format_2 = TabularFormat::from_path(&opts.path_2)?;
    let (name_1, name_2) = util::fs::table_names(&opts.path_1, &opts.path_2)?;

    let left = tabular::load(format_1, &opts.path_1, name_1)?;
    let right = tabular::load(format_2, &opts.path_2, name_2)?;

    let result = repositories::compare::compare(&left, &right, &opts.key_column)?;

    util::fs::create_dir_all(&opts.output_dir)?;
    let output_path = util::fs::output_path(&opts.output_dir, &chrono::Local::now());
    report::save_report(&result, &output_path)?;

    log::info!("Comparison completed: {:?}", output_path);
    Ok(CompareReport {
        result,
        output_path,
    })
}
