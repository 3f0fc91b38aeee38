//! # CellValue
//!
//! A single value read from an input table. `Null` is a genuinely empty cell;
//! a column that does not exist in a table is modeled as `Option::None` by
//! the caller, never as a `CellValue`.
//!

use polars::prelude::AnyValue;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl CellValue {
    pub fn from_any(value: &AnyValue) -> CellValue {
        match value {
            AnyValue::Null => CellValue::Null,
            AnyValue::Boolean(val) => CellValue::Bool(*val),
            AnyValue::Int8(val) => CellValue::Int(*val as i64),
            AnyValue::Int16(val) => CellValue::Int(*val as i64),
            AnyValue::Int32(val) => CellValue::Int(*val as i64),
            AnyValue::Int64(val) => CellValue::Int(*val),
            AnyValue::UInt8(val) => CellValue::Int(*val as i64),
            AnyValue::UInt16(val) => CellValue::Int(*val as i64),
            AnyValue::UInt32(val) => CellValue::Int(*val as i64),
            AnyValue::UInt64(val) => match i64::try_from(*val) {
                Ok(val) => CellValue::Int(val),
                Err(_) => CellValue::Float(*val as f64),
            },
            AnyValue::Float32(val) => CellValue::Float(*val as f64),
            AnyValue::Float64(val) => CellValue::Float(*val),
            AnyValue::String(val) => CellValue::Str(val.to_string()),
            AnyValue::StringOwned(val) => CellValue::Str(val.to_string()),
            val => CellValue::Str(val.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the value as a number. Strings are parsed after trimming,
    /// booleans count as 1 and 0, and nulls have no numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(val) => Some(if *val { 1.0 } else { 0.0 }),
            CellValue::Int(val) => Some(*val as f64),
            CellValue::Float(val) => Some(*val),
            CellValue::Str(val) => val.trim().parse::<f64>().ok(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Str(_) => 3,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) => cmp_int_float(*a, *b),
            (CellValue::Float(a), CellValue::Int(b)) => cmp_int_float(*b, *a).reverse(),
            // -0.0 equals 0.0, NaN sorts by sign past the infinities
            (CellValue::Float(a), CellValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
            }
            (CellValue::Str(a), CellValue::Str(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

// 2^63, the first float above i64::MAX
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float. The integer is never cast
/// to f64, which rounds above 2^53.
fn cmp_int_float(a: i64, b: f64) -> Ordering {
    if b.is_nan() {
        return if b.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if b >= I64_BOUND {
        return Ordering::Less;
    }
    if b < -I64_BOUND {
        return Ordering::Greater;
    }

    let whole = b.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal if b > whole => Ordering::Less,
        Ordering::Equal if b < whole => Ordering::Greater,
        ordering => ordering,
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the ordering so that `1` and `1.0` are the same value.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(val) => write!(f, "{val}"),
            CellValue::Int(val) => write!(f, "{val}"),
            CellValue::Float(val) => write!(f, "{val}"),
            CellValue::Str(val) => write!(f, "{val}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Str(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Str(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}
