//! # tabcompare schema
//!
//! Inspect the columns of a tabular file
//!

use polars::prelude::Field;
use std::path::Path;

use crate::core::df::tabular;
use crate::error::TabCompareError;

/// Column names and dtypes of a csv or xlsx file, as they will be compared
pub fn schema(input: impl AsRef<Path>) -> Result<Vec<Field>, TabCompareError> {
    tabular::get_schema(input)
}
