// Version
pub const TABCOMPARE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Filenames and dirs
pub const OUTPUT_FILE_PREFIX: &str = "comparison_result";
pub const OUTPUT_FILE_EXTENSION: &str = "xlsx";
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const DEFAULT_CONFIG_FILENAME: &str = "tabcompare.toml";

// Report sheets
pub const SUMMARY_SHEET: &str = "SUMMARY";
pub const DETAILED_MISMATCHES_SHEET: &str = "DETAILED_MISMATCHES";
pub const MISSING_KEYS_SHEET: &str = "MISSING_KEYS";

pub const SUMMARY_COLUMN_WIDTH: f64 = 18.0;
pub const DETAIL_COLUMN_WIDTH: f64 = 25.0;

// Excel "Good" / "Bad" fills
pub const MATCH_FILL_COLOR: u32 = 0xC6EFCE;
pub const MISMATCH_FILL_COLOR: u32 = 0xFFC7CE;

// Report columns
pub const KEY_COL: &str = "key";
pub const TOTAL_COLUMNS_COL: &str = "total_columns";
pub const MATCHED_COLUMNS_COL: &str = "matched_columns";
pub const MISMATCHED_COLUMNS_COL: &str = "mismatched_columns";
pub const MATCH_PERCENTAGE_COL: &str = "match_percentage";
pub const STATUS_COL: &str = "status";
pub const COLUMN_NAME_COL: &str = "column_name";
pub const DIFFERENCE_COL: &str = "difference";
pub const PRESENT_IN_COL: &str = "present_in";

pub const SUMMARY_COLUMNS: [&str; 6] = [
    KEY_COL,
    TOTAL_COLUMNS_COL,
    MATCHED_COLUMNS_COL,
    MISMATCHED_COLUMNS_COL,
    MATCH_PERCENTAGE_COL,
    STATUS_COL,
];
pub const MISSING_COLUMNS: [&str; 2] = [KEY_COL, PRESENT_IN_COL];

// Status values
pub const MATCH_STATUS: &str = "MATCH";
pub const MISMATCH_STATUS: &str = "MISMATCH";
pub const ONLY_SUFFIX: &str = "_only";
