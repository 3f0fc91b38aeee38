use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX, OUTPUT_TIMESTAMP_FORMAT};
use crate::error::TabCompareError;

/// File name without its extension, used as the table name in reports.
pub fn file_stem(path: impl AsRef<Path>) -> Result<String, TabCompareError> {
    let path = path.as_ref();
    match path.file_stem() {
        Some(stem) => Ok(stem.to_string_lossy().to_string()),
        None => {
            let err = format!("Invalid file name {:?}", path);
            Err(TabCompareError::basic_str(err))
        }
    }
}

/// Lowercased extension, empty if there is none.
pub fn file_extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Table names for the two inputs. Identical stems get `_1` / `_2` so the
/// report can tell them apart.
pub fn table_names(
    path_1: impl AsRef<Path>,
    path_2: impl AsRef<Path>,
) -> Result<(String, String), TabCompareError> {
    let name_1 = file_stem(path_1)?;
    let name_2 = file_stem(path_2)?;
    if name_1 == name_2 {
        return Ok((format!("{name_1}_1"), format!("{name_2}_2")));
    }
    Ok((name_1, name_2))
}

/// `comparison_result_YYYYMMDD_HHMMSS.xlsx`
pub fn output_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.{}",
        OUTPUT_FILE_PREFIX,
        timestamp.format(OUTPUT_TIMESTAMP_FORMAT),
        OUTPUT_FILE_EXTENSION
    )
}

pub fn output_path<Tz: TimeZone>(dir: impl AsRef<Path>, timestamp: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.as_ref().join(output_file_name(timestamp))
}

pub fn create_dir_all(path: impl AsRef<Path>) -> Result<(), TabCompareError> {
    let path = path.as_ref();
    match fs::create_dir_all(path) {
        Ok(_) => Ok(()),
        Err(err) => {
            log::error!("create_dir_all {:?} failed: {}", path, err);
            Err(TabCompareError::IO(err))
        }
    }
}

pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<(), TabCompareError> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(_) => Ok(()),
        Err(err) => {
            log::error!("remove_dir_all {:?} failed: {}", path, err);
            Err(TabCompareError::IO(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::path::Path;

    use crate::error::TabCompareError;
    use crate::util;

    #[test]
    fn test_output_file_name() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            util::fs::output_file_name(&timestamp),
            "comparison_result_20240309_070501.xlsx"
        );
        assert_eq!(
            util::fs::output_path("reports", &timestamp),
            Path::new("reports/comparison_result_20240309_070501.xlsx")
        );
    }

    #[test]
    fn test_table_names() -> Result<(), TabCompareError> {
        let (a, b) = util::fs::table_names("data/before.csv", "data/after.xlsx")?;
        assert_eq!(a, "before");
        assert_eq!(b, "after");

        let (a, b) = util::fs::table_names("old/players.csv", "new/players.csv")?;
        assert_eq!(a, "players_1");
        assert_eq!(b, "players_2");
        Ok(())
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(util::fs::file_extension("a/B.XLSX"), "xlsx");
        assert_eq!(util::fs::file_extension("a/b"), "");
    }
}
