//! # xlsx report
//!
//! One workbook with three sheets
//!
//! - `SUMMARY` one row per key found in both files, worst match first
//! - `DETAILED_MISMATCHES` one row per differing (key, column) pair
//! - `MISSING_KEYS` keys found in only one file
//!

use std::path::Path;

use rust_xlsxwriter::{
    Color, ConditionalFormatFormula, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};

use crate::constants::{
    COLUMN_NAME_COL, DETAILED_MISMATCHES_SHEET, DETAIL_COLUMN_WIDTH, DIFFERENCE_COL, KEY_COL,
    MATCH_FILL_COLOR, MATCH_STATUS, MISMATCH_FILL_COLOR, MISMATCH_STATUS, MISSING_COLUMNS,
    MISSING_KEYS_SHEET, SUMMARY_COLUMNS, SUMMARY_COLUMN_WIDTH, SUMMARY_SHEET,
};
use crate::error::TabCompareError;
use crate::model::{CellValue, CompareResult};

// Zero based index of the status column on the summary sheet
const STATUS_COL_IDX: u16 = 5;

pub fn save_report(result: &CompareResult, path: impl AsRef<Path>) -> Result<(), TabCompareError> {
    let path = path.as_ref();
    log::info!("Saving report to: {:?}", path);

    let mut workbook = Workbook::new();
    write_summary_sheet(&mut workbook, result)?;
    write_mismatch_sheet(&mut workbook, result)?;
    write_missing_sheet(&mut workbook, result)?;
    workbook.save(path)?;

    log::debug!(
        "save_report wrote {} summary, {} mismatch, {} missing rows to {:?}",
        result.summary.len(),
        result.mismatches.len(),
        result.missing.len(),
        path
    );
    Ok(())
}

/// Header row for the DETAILED_MISMATCHES sheet. The two value columns are
/// named after the compared tables.
pub fn mismatch_columns(result: &CompareResult) -> Vec<String> {
    vec![
        KEY_COL.to_string(),
        COLUMN_NAME_COL.to_string(),
        result.left_name.to_owned(),
        result.right_name.to_owned(),
        DIFFERENCE_COL.to_string(),
    ]
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}

fn write_header(
    sheet: &mut Worksheet,
    columns: &[impl AsRef<str>],
    format: Option<&Format>,
    width: f64,
) -> Result<(), TabCompareError> {
    for (idx, name) in columns.iter().enumerate() {
        let col = idx as u16;
        match format {
            Some(format) => sheet.write_string_with_format(0, col, name.as_ref(), format)?,
            None => sheet.write_string(0, col, name.as_ref())?,
        };
        sheet.set_column_width(col, width)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Nulls and absent values are left as blank cells.
fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&CellValue>,
) -> Result<(), TabCompareError> {
    match value {
        None | Some(CellValue::Null) => {}
        Some(CellValue::Bool(val)) => {
            sheet.write_boolean(row, col, *val)?;
        }
        Some(CellValue::Int(val)) => {
            sheet.write_number(row, col, *val as f64)?;
        }
        Some(CellValue::Float(val)) => {
            sheet.write_number(row, col, *val)?;
        }
        Some(CellValue::Str(val)) => {
            sheet.write_string(row, col, val)?;
        }
    }
    Ok(())
}

fn write_summary_sheet(workbook: &mut Workbook, result: &CompareResult) -> Result<(), TabCompareError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    write_header(sheet, &SUMMARY_COLUMNS, Some(&header_format()), SUMMARY_COLUMN_WIDTH)?;

    let rows = result.summary_by_match_percentage();
    for (idx, summary) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        write_cell(sheet, row, 0, Some(&summary.key))?;
        sheet.write_number(row, 1, summary.total_columns as f64)?;
        sheet.write_number(row, 2, summary.matched_columns as f64)?;
        sheet.write_number(row, 3, summary.mismatched_columns as f64)?;
        sheet.write_number(row, 4, summary.match_percentage)?;
        sheet.write_string(row, STATUS_COL_IDX, summary.status.as_str())?;
    }

    if !rows.is_empty() {
        let last_row = rows.len() as u32;
        // Exact matches, "MISMATCH" contains "MATCH" so a substring rule would overlap
        for (status, color) in [
            (MATCH_STATUS, MATCH_FILL_COLOR),
            (MISMATCH_STATUS, MISMATCH_FILL_COLOR),
        ] {
            let format = Format::new().set_background_color(Color::RGB(color));
            let rule = ConditionalFormatFormula::new()
                .set_rule(format!("=$F2=\"{status}\"").as_str())
                .set_format(&format);
            sheet.add_conditional_format(1, STATUS_COL_IDX, last_row, STATUS_COL_IDX, &rule)?;
        }
    }

    Ok(())
}

fn write_mismatch_sheet(
    workbook: &mut Workbook,
    result: &CompareResult,
) -> Result<(), TabCompareError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(DETAILED_MISMATCHES_SHEET)?;
    write_header(sheet, &mismatch_columns(result), None, DETAIL_COLUMN_WIDTH)?;

    for (idx, mismatch) in result.mismatches.iter().enumerate() {
        let row = idx as u32 + 1;
        write_cell(sheet, row, 0, Some(&mismatch.key))?;
        sheet.write_string(row, 1, &mismatch.column_name)?;
        write_cell(sheet, row, 2, mismatch.left.as_ref())?;
        write_cell(sheet, row, 3, mismatch.right.as_ref())?;
        if let Some(difference) = mismatch.difference {
            sheet.write_number(row, 4, difference)?;
        }
    }

    Ok(())
}

fn write_missing_sheet(workbook: &mut Workbook, result: &CompareResult) -> Result<(), TabCompareError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(MISSING_KEYS_SHEET)?;
    write_header(sheet, &MISSING_COLUMNS, None, DETAIL_COLUMN_WIDTH)?;

    for (idx, missing) in result.missing.iter().enumerate() {
        let row = idx as u32 + 1;
        write_cell(sheet, row, 0, Some(&missing.key))?;
        sheet.write_string(row, 1, &missing.present_in)?;
    }

    Ok(())
}
