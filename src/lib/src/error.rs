//! Errors for the tabcompare library
//!
//! Enumeration for all errors that can occur while loading, comparing and reporting
//!

use derive_more::{Display, Error};
use std::fmt::Debug;
use std::io;
use std::path::Path;

pub mod path_buf_error;
pub mod string_error;

pub use crate::error::path_buf_error::PathBufError;
pub use crate::error::string_error::StringError;

pub const SUPPORTED_FORMATS_MSG: &str = "Only CSV (.csv) and Excel (.xlsx) files are supported";

#[derive(Debug, Display, Error)]
pub enum TabCompareError {
    // Input files
    UnsupportedFormat(StringError),
    #[display("Path does not exist: {_0}")]
    PathDoesNotExist(Box<PathBufError>),
    EmptyWorkbook(StringError),

    // Key column, duplicate keys, missing arguments
    Configuration(StringError),

    // External Library Errors
    IO(io::Error),
    Polars(polars::prelude::PolarsError),
    Calamine(calamine::XlsxError),
    Xlsx(rust_xlsxwriter::XlsxError),
    TomlDe(toml::de::Error),
    JSON(serde_json::Error),

    // Fallback
    Basic(StringError),
}

impl TabCompareError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        TabCompareError::Basic(StringError::from(s.as_ref()))
    }

    pub fn configuration(s: impl AsRef<str>) -> Self {
        TabCompareError::Configuration(StringError::from(s.as_ref()))
    }

    pub fn unsupported_format(path: impl AsRef<Path>) -> Self {
        let err = format!("{SUPPORTED_FORMATS_MSG}, found {:?}", path.as_ref());
        TabCompareError::UnsupportedFormat(StringError::from(err))
    }

    pub fn path_does_not_exist(path: impl AsRef<Path>) -> Self {
        TabCompareError::PathDoesNotExist(Box::new(path.as_ref().into()))
    }

    pub fn empty_workbook(path: impl AsRef<Path>) -> Self {
        let err = format!("Workbook has no worksheet with a header row: {:?}", path.as_ref());
        TabCompareError::EmptyWorkbook(StringError::from(err))
    }

    pub fn key_column_not_found(key_column: impl AsRef<str>, names: &[&str]) -> Self {
        let err = format!(
            "Key column '{}' must exist in both files, missing from: {}",
            key_column.as_ref(),
            names.join(", ")
        );
        TabCompareError::configuration(err)
    }

    pub fn duplicate_key(key: impl std::fmt::Display, name: impl AsRef<str>) -> Self {
        let err = format!(
            "Duplicate key '{}' in '{}', key values must be unique",
            key,
            name.as_ref()
        );
        TabCompareError::configuration(err)
    }

    pub fn duplicate_column(column: impl AsRef<str>, path: impl AsRef<Path>) -> Self {
        let err = format!(
            "Column '{}' appears more than once in the header of {:?}, column names must be unique",
            column.as_ref(),
            path.as_ref()
        );
        TabCompareError::configuration(err)
    }

    pub fn null_key(row: usize, name: impl AsRef<str>) -> Self {
        let err = format!(
            "Empty key value at row {} in '{}', every row needs a key",
            row,
            name.as_ref()
        );
        TabCompareError::configuration(err)
    }

    pub fn missing_argument(arg: impl AsRef<str>) -> Self {
        let err = format!(
            "Missing '{}', pass it on the command line or set it in the config file",
            arg.as_ref()
        );
        TabCompareError::configuration(err)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, TabCompareError::Configuration(_))
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, TabCompareError::UnsupportedFormat(_))
    }
}

impl From<io::Error> for TabCompareError {
    fn from(error: io::Error) -> Self {
        TabCompareError::IO(error)
    }
}

impl From<String> for TabCompareError {
    fn from(error: String) -> Self {
        TabCompareError::Basic(StringError::from(error))
    }
}

impl From<polars::prelude::PolarsError> for TabCompareError {
    fn from(error: polars::prelude::PolarsError) -> Self {
        TabCompareError::Polars(error)
    }
}

impl From<calamine::XlsxError> for TabCompareError {
    fn from(error: calamine::XlsxError) -> Self {
        TabCompareError::Calamine(error)
    }
}

impl From<rust_xlsxwriter::XlsxError> for TabCompareError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        TabCompareError::Xlsx(error)
    }
}

impl From<toml::de::Error> for TabCompareError {
    fn from(error: toml::de::Error) -> Self {
        TabCompareError::TomlDe(error)
    }
}

impl From<serde_json::Error> for TabCompareError {
    fn from(error: serde_json::Error) -> Self {
        TabCompareError::JSON(error)
    }
}
