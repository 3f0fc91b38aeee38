use serde::Serialize;

use crate::constants::ONLY_SUFFIX;
use crate::model::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentIn {
    Left,
    Right,
}

/// A key found in only one of the two tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingRow {
    pub key: CellValue,
    pub side: PresentIn,
    pub present_in: String,
}

impl MissingRow {
    pub fn new(key: CellValue, side: PresentIn, table_name: impl AsRef<str>) -> MissingRow {
        MissingRow {
            key,
            side,
            present_in: format!("{}{}", table_name.as_ref(), ONLY_SUFFIX),
        }
    }
}
