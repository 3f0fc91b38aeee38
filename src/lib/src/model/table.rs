//! # Table
//!
//! An input file held in memory, rows in file order. Re-indexing by a key
//! column happens in [`KeyedTable`], which borrows from the table.
//!

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::TabCompareError;
use crate::model::CellValue;

#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub numeric_columns: HashSet<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(name: impl AsRef<str>, columns: Vec<String>) -> Table {
        Table {
            name: name.as_ref().to_string(),
            columns,
            numeric_columns: HashSet::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_numeric_columns(mut self, columns: &[&str]) -> Table {
        self.numeric_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Rows shorter than the header are padded with nulls, longer rows are truncated.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Null);
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric_columns.contains(column)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// A [`Table`] indexed by the values of its key column. The key column
/// itself is not one of the compared columns.
#[derive(Debug)]
pub struct KeyedTable<'a> {
    pub table: &'a Table,
    pub key_column: String,
    columns: HashMap<&'a str, usize>,
    rows: BTreeMap<&'a CellValue, &'a [CellValue]>,
}

impl<'a> KeyedTable<'a> {
    pub fn new(table: &'a Table, key_column: &str) -> Result<KeyedTable<'a>, TabCompareError> {
        let Some(key_idx) = table.column_index(key_column) else {
            return Err(TabCompareError::key_column_not_found(
                key_column,
                &[table.name.as_str()],
            ));
        };

        let columns: HashMap<&str, usize> = table
            .columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != key_idx)
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();

        let mut rows: BTreeMap<&CellValue, &[CellValue]> = BTreeMap::new();
        for (row_num, row) in table.rows.iter().enumerate() {
            let key = &row[key_idx];
            if key.is_null() {
                // +2 for the header row and one based row numbers
                return Err(TabCompareError::null_key(row_num + 2, &table.name));
            }
            if rows.insert(key, row.as_slice()).is_some() {
                return Err(TabCompareError::duplicate_key(key, &table.name));
            }
        }

        log::debug!(
            "KeyedTable {} indexed {} rows on {}",
            table.name,
            rows.len(),
            key_column
        );

        Ok(KeyedTable {
            table,
            key_column: key_column.to_string(),
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.table.name
    }

    pub fn contains_key(&self, key: &CellValue) -> bool {
        self.rows.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a CellValue> + '_ {
        self.rows.keys().copied()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.columns.keys().copied()
    }

    pub fn is_numeric(&self, column: &str) -> bool {
        self.table.is_numeric(column)
    }

    /// Value of `column` for the row with `key`. `None` when the column does
    /// not exist in this table or the key is not present.
    pub fn get(&self, key: &CellValue, column: &str) -> Option<&'a CellValue> {
        let idx = self.columns.get(column)?;
        let row: &'a [CellValue] = *self.rows.get(key)?;
        row.get(*idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
