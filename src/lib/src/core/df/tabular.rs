use calamine::{open_workbook, Data, Reader, Xlsx};
use itertools::Itertools;
use polars::prelude::*;
use std::path::Path;

use crate::error::TabCompareError;
use crate::model::{CellValue, Table, TabularFormat};

const CSV_READ_ERROR: &str = "Could not read csv from path";
const XLSX_READ_ERROR: &str = "Could not read xlsx from path";

static EMPTY_CELL: Data = Data::Empty;

fn csv_parse_options() -> CsvParseOptions {
    CsvParseOptions::default()
        .with_separator(b',')
        .with_quote_char(Some(b'"'))
        .with_encoding(CsvEncoding::LossyUtf8)
        .with_truncate_ragged_lines(true)
}

pub fn read_df_csv(path: impl AsRef<Path>) -> Result<DataFrame, TabCompareError> {
    let path = path.as_ref();
    log::debug!("read_df_csv path: {:?}", path);

    // No inference limit, a dtype is only fixed after every row has been seen
    let result = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(csv_parse_options())
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish());

    let df = match result {
        Ok(df) => df,
        Err(err) => {
            let err = format!("{CSV_READ_ERROR} {path:?}: {err}");
            return Err(TabCompareError::basic_str(err));
        }
    };

    // polars renames repeated header names, check the names as written
    check_unique_columns(&read_csv_header(path)?, path)?;
    Ok(df)
}

/// Header cells exactly as they appear in the first line of the file.
fn read_csv_header(path: &Path) -> Result<Vec<String>, TabCompareError> {
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_n_rows(Some(1))
        .with_parse_options(csv_parse_options())
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())?;

    let mut names: Vec<String> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = match column.get(0)? {
            AnyValue::Null => String::new(),
            AnyValue::String(val) => val.to_string(),
            AnyValue::StringOwned(val) => val.to_string(),
            val => val.to_string(),
        };
        names.push(name);
    }
    Ok(names)
}

/// Both loaders reject a header that names the same column twice. Empty
/// header cells are not names and are skipped.
pub fn check_unique_columns(names: &[String], path: &Path) -> Result<(), TabCompareError> {
    match names.iter().filter(|name| !name.is_empty()).duplicates().next() {
        Some(name) => Err(TabCompareError::duplicate_column(name, path)),
        None => Ok(()),
    }
}

/// Reads the first worksheet, using its first row as the header.
pub fn read_df_xlsx(path: impl AsRef<Path>) -> Result<DataFrame, TabCompareError> {
    let path = path.as_ref();
    log::debug!("read_df_xlsx path: {:?}", path);

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|err| {
        TabCompareError::basic_str(format!("{XLSX_READ_ERROR} {path:?}: {err}"))
    })?;

    let Some(range) = workbook.worksheet_range_at(0) else {
        return Err(TabCompareError::empty_workbook(path));
    };
    let range = range?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(TabCompareError::empty_workbook(path));
    };

    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Data::Empty => format!("column_{}", idx + 1),
            cell => cell.to_string(),
        })
        .collect();
    check_unique_columns(&names, path)?;

    let body: Vec<&[Data]> = rows.collect();
    log::debug!(
        "read_df_xlsx {} columns {} rows in first sheet",
        names.len(),
        body.len()
    );

    let columns = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<&Data> = body
                .iter()
                .map(|row| row.get(idx).unwrap_or(&EMPTY_CELL))
                .collect();
            xlsx_cells_to_column(name, &cells)
        })
        .collect::<Vec<Column>>();

    Ok(DataFrame::new(columns)?)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CellKind {
    Empty,
    Int,
    Float,
    Bool,
    Str,
}

fn xlsx_cell_kind(cell: &Data) -> CellKind {
    match cell {
        Data::Empty => CellKind::Empty,
        Data::Int(_) => CellKind::Int,
        // Excel stores every number as a float
        Data::Float(val) if val.fract() == 0.0 && val.abs() < i64::MAX as f64 => CellKind::Int,
        Data::Float(_) => CellKind::Float,
        Data::Bool(_) => CellKind::Bool,
        _ => CellKind::Str,
    }
}

fn merge_kinds(a: CellKind, b: CellKind) -> CellKind {
    match (a, b) {
        (CellKind::Empty, kind) | (kind, CellKind::Empty) => kind,
        (a, b) if a == b => a,
        (CellKind::Int, CellKind::Float) | (CellKind::Float, CellKind::Int) => CellKind::Float,
        _ => CellKind::Str,
    }
}

fn xlsx_cells_to_column(name: &str, cells: &[&Data]) -> Column {
    let kind = cells
        .iter()
        .map(|cell| xlsx_cell_kind(cell))
        .fold(CellKind::Empty, merge_kinds);

    let name = PlSmallStr::from(name);
    match kind {
        CellKind::Int => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Int(val) => Some(*val),
                    Data::Float(val) => Some(*val as i64),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        CellKind::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Int(val) => Some(*val as f64),
                    Data::Float(val) => Some(*val),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        CellKind::Bool => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Bool(val) => Some(*val),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        CellKind::Empty | CellKind::Str => {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Empty => None,
                    cell => Some(cell.to_string()),
                })
                .collect();
            Column::new(name, values)
        }
    }
}

pub fn read_df(format: TabularFormat, path: impl AsRef<Path>) -> Result<DataFrame, TabCompareError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TabCompareError::path_does_not_exist(path));
    }

    match format {
        TabularFormat::Csv => read_df_csv(path),
        TabularFormat::Xlsx => read_df_xlsx(path),
    }
}

pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

pub fn df_to_table(name: impl AsRef<str>, df: &DataFrame) -> Result<Table, TabCompareError> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut table = Table::new(name, columns);
    table.numeric_columns = df
        .get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(|column| column.name().to_string())
        .collect();

    for idx in 0..df.height() {
        let mut row: Vec<CellValue> = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            row.push(CellValue::from_any(&column.get(idx)?));
        }
        table.push_row(row);
    }

    Ok(table)
}

/// Reads `path` as `format` into a [`Table`] called `name`.
pub fn load(
    format: TabularFormat,
    path: impl AsRef<Path>,
    name: impl AsRef<str>,
) -> Result<Table, TabCompareError> {
    let path = path.as_ref();
    log::info!("Reading file: {:?}", path);
    let df = read_df(format, path)?;
    let table = df_to_table(name, &df)?;
    log::info!(
        "Loaded {:?} with {} rows and {} columns",
        path,
        table.height(),
        table.width()
    );
    Ok(table)
}

/// Column names and dtypes of a tabular file, in file order.
pub fn get_schema(path: impl AsRef<Path>) -> Result<Vec<Field>, TabCompareError> {
    let path = path.as_ref();
    let format = TabularFormat::from_path(path)?;
    let df = read_df(format, path)?;
    let fields = df
        .get_columns()
        .iter()
        .map(|column| Field::new(column.name().clone(), column.dtype().clone()))
        .collect();
    Ok(fields)
}
