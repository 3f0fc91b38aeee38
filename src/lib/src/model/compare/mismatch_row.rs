use serde::Serialize;

use crate::model::CellValue;

/// One (key, column) pair whose values differ between the two tables.
/// `left` / `right` are `None` when the column does not exist in that table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MismatchRow {
    pub key: CellValue,
    pub column_name: String,
    pub left: Option<CellValue>,
    pub right: Option<CellValue>,
    pub difference: Option<f64>,
}

impl MismatchRow {
    pub fn new(
        key: CellValue,
        column_name: impl AsRef<str>,
        left: Option<&CellValue>,
        right: Option<&CellValue>,
        is_numeric: bool,
    ) -> MismatchRow {
        let difference = if is_numeric {
            numeric_difference(left, right)
        } else {
            None
        };

        MismatchRow {
            key,
            column_name: column_name.as_ref().to_string(),
            left: left.cloned(),
            right: right.cloned(),
            difference,
        }
    }
}

/// `right - left` when both sides can be read as numbers, otherwise `None`.
pub fn numeric_difference(left: Option<&CellValue>, right: Option<&CellValue>) -> Option<f64> {
    let left = left?.as_f64()?;
    let right = right?.as_f64()?;
    Some(right - left)
}

#[cfg(test)]
mod tests {
    use crate::model::compare::mismatch_row::numeric_difference;
    use crate::model::compare::MismatchRow;
    use crate::model::CellValue;

    #[test]
    fn test_numeric_difference() {
        let ten = CellValue::Int(10);
        let twelve = CellValue::Float(12.0);
        assert_eq!(numeric_difference(Some(&ten), Some(&twelve)), Some(2.0));
        assert_eq!(numeric_difference(Some(&twelve), Some(&ten)), Some(-2.0));
    }

    #[test]
    fn test_numeric_difference_not_applicable() {
        let ten = CellValue::Int(10);
        let text = CellValue::from("n/a");
        assert_eq!(numeric_difference(Some(&ten), Some(&text)), None);
        assert_eq!(numeric_difference(None, Some(&ten)), None);
        assert_eq!(numeric_difference(Some(&CellValue::Null), Some(&ten)), None);
    }

    #[test]
    fn test_non_numeric_column_has_no_difference() {
        let row = MismatchRow::new(
            CellValue::Int(1),
            "code",
            Some(&CellValue::from("10")),
            Some(&CellValue::from("12")),
            false,
        );
        assert_eq!(row.difference, None);
        assert_eq!(row.column_name, "code");
    }
}
