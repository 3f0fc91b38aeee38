use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::TabCompareError;
use crate::util;

/// The input formats we know how to load. Resolved once from the file
/// extension, everything downstream matches on this instead of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabularFormat {
    Csv,
    Xlsx,
}

impl TabularFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Result<TabularFormat, TabCompareError> {
        let path = path.as_ref();
        match util::fs::file_extension(path).as_str() {
            "csv" => Ok(TabularFormat::Csv),
            "xlsx" => Ok(TabularFormat::Xlsx),
            _ => Err(TabCompareError::unsupported_format(path)),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TabularFormat::Csv => "csv",
            TabularFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for TabularFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
