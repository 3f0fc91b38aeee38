//! Helpers for our unit and integration tests
//!

use crate::error::TabCompareError;
use crate::model::CellValue;
use crate::util;

use env_logger::Env;
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

const TEST_RUN_DIR: &str = "data/test/runs";

pub const PLAYERS_BEFORE_CSV: &str = "\
player_id,name,team,runs,average
1,ann,red,120,40.5
2,bob,blue,80,20.0
3,cat,red,45,15.0
4,dan,blue,10,5.0
";

pub const PLAYERS_AFTER_CSV: &str = "\
player_id,name,team,runs,average
1,ann,red,120,40.5
2,bob,green,95,23.75
3,cat,red,45,15.0
5,eve,blue,60,30.0
";

pub fn init_test_env() {
    let env = Env::default();
    if env_logger::try_init_from_env(env).is_ok() {
        log::debug!("Logger initialized");
    }
}

fn create_prefixed_dir(base_dir: &str, prefix: &str) -> Result<PathBuf, TabCompareError> {
    let dir_name = format!("{}_{}", prefix, uuid::Uuid::new_v4());
    let full_dir = Path::new(base_dir).join(dir_name);
    std::fs::create_dir_all(&full_dir)?;
    Ok(full_dir)
}

fn create_empty_dir(base_dir: &str) -> Result<PathBuf, TabCompareError> {
    create_prefixed_dir(base_dir, "dir")
}

/// Run a test inside a fresh directory that is removed afterwards, even if
/// the test panics.
pub fn run_empty_dir_test<T>(test: T) -> Result<(), TabCompareError>
where
    T: FnOnce(&Path) -> Result<(), TabCompareError> + std::panic::UnwindSafe,
{
    init_test_env();
    let dir = create_empty_dir(TEST_RUN_DIR)?;

    // Run test to see if it panic'd
    let result = std::panic::catch_unwind(|| match test(&dir) {
        Ok(_) => {}
        Err(err) => {
            panic!("Error running test. Err: {}", err);
        }
    });

    // Remove test dir
    util::fs::remove_dir_all(&dir)?;

    // Assert everything okay after we cleanup the dir
    assert!(result.is_ok());

    Ok(())
}

/// Writes the two player fixtures as `players_before.csv` and
/// `players_after.csv` inside `dir`.
pub fn write_players_csv_pair(dir: &Path) -> Result<(PathBuf, PathBuf), TabCompareError> {
    let before = write_txt_file_to_path(dir.join("players_before.csv"), PLAYERS_BEFORE_CSV)?;
    let after = write_txt_file_to_path(dir.join("players_after.csv"), PLAYERS_AFTER_CSV)?;
    Ok((before, after))
}

pub fn write_txt_file_to_path<P: AsRef<Path>>(
    path: P,
    contents: &str,
) -> Result<PathBuf, TabCompareError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path.to_path_buf())
}

/// Single sheet workbook with a header row. Null cells are left empty.
pub fn write_xlsx_file_to_path<P: AsRef<Path>>(
    path: P,
    header: &[&str],
    rows: &[Vec<CellValue>],
) -> Result<PathBuf, TabCompareError> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                CellValue::Null => {}
                CellValue::Bool(val) => {
                    sheet.write_boolean(row_num, col, *val)?;
                }
                CellValue::Int(val) => {
                    sheet.write_number(row_num, col, *val as f64)?;
                }
                CellValue::Float(val) => {
                    sheet.write_number(row_num, col, *val)?;
                }
                CellValue::Str(val) => {
                    sheet.write_string(row_num, col, val)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(path.to_path_buf())
}
