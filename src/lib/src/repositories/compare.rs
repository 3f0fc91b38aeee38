//! # repositories::compare
//!
//! Compare two tables row by row, aligned on a key column.
//!

use itertools::Itertools;
use std::collections::BTreeSet;

use crate::error::TabCompareError;
use crate::model::{
    CellValue, CompareResult, KeyedTable, MismatchRow, MissingRow, PresentIn, SummaryRow, Table,
};

/// The key column must exist in both tables. Checked up front so that a bad
/// key aborts before anything is compared.
pub fn validate_key_column(
    left: &Table,
    right: &Table,
    key_column: &str,
) -> Result<(), TabCompareError> {
    let missing_from: Vec<&str> = [left, right]
        .iter()
        .filter(|table| !table.has_column(key_column))
        .map(|table| table.name.as_str())
        .collect();

    if !missing_from.is_empty() {
        return Err(TabCompareError::key_column_not_found(
            key_column,
            &missing_from,
        ));
    }
    Ok(())
}

/// Sorted union of the compared (non key) columns of both tables.
pub fn column_universe(left: &KeyedTable, right: &KeyedTable) -> Vec<String> {
    left.column_names()
        .chain(right.column_names())
        .sorted()
        .dedup()
        .map(|name| name.to_string())
        .collect()
}

/// Sorted union of the keys of both tables.
pub fn key_universe<'a>(left: &KeyedTable<'a>, right: &KeyedTable<'a>) -> Vec<&'a CellValue> {
    left.keys()
        .chain(right.keys())
        .collect::<BTreeSet<&CellValue>>()
        .into_iter()
        .collect()
}

pub fn compare(
    left: &Table,
    right: &Table,
    key_column: impl AsRef<str>,
) -> Result<CompareResult, TabCompareError> {
    let key_column = key_column.as_ref();
    validate_key_column(left, right, key_column)?;

    let left_keyed = KeyedTable::new(left, key_column)?;
    let right_keyed = KeyedTable::new(right, key_column)?;

    let keys = key_universe(&left_keyed, &right_keyed);
    let columns = column_universe(&left_keyed, &right_keyed);

    log::info!("Total keys to compare: {}", keys.len());
    log::info!("Total columns to compare: {}", columns.len());

    // Numeric if either side declares it numeric
    let numeric: Vec<bool> = columns
        .iter()
        .map(|col| left_keyed.is_numeric(col) || right_keyed.is_numeric(col))
        .collect();

    let mut summary: Vec<SummaryRow> = vec![];
    let mut mismatches: Vec<MismatchRow> = vec![];
    let mut missing: Vec<MissingRow> = vec![];

    for key in keys {
        if !left_keyed.contains_key(key) {
            missing.push(MissingRow::new(key.clone(), PresentIn::Right, &right.name));
            continue;
        }
        if !right_keyed.contains_key(key) {
            missing.push(MissingRow::new(key.clone(), PresentIn::Left, &left.name));
            continue;
        }

        let mut num_mismatches = 0;
        for (col, is_numeric) in columns.iter().zip(numeric.iter()) {
            let left_val = left_keyed.get(key, col);
            let right_val = right_keyed.get(key, col);

            if left_val != right_val {
                num_mismatches += 1;
                mismatches.push(MismatchRow::new(
                    key.clone(),
                    col,
                    left_val,
                    right_val,
                    *is_numeric,
                ));
            }
        }

        summary.push(SummaryRow::new(key.clone(), columns.len(), num_mismatches));
    }

    log::debug!(
        "compare {} vs {}: {} summary rows, {} mismatches, {} missing",
        left.name,
        right.name,
        summary.len(),
        mismatches.len(),
        missing.len()
    );

    Ok(CompareResult {
        left_name: left.name.to_owned(),
        right_name: right.name.to_owned(),
        key_column: key_column.to_string(),
        columns,
        summary,
        mismatches,
        missing,
    })
}
