use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MATCH_STATUS, MISMATCH_STATUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    Match,
    Mismatch,
}

impl MatchStatus {
    pub fn from_mismatches(mismatched_columns: usize) -> MatchStatus {
        if mismatched_columns == 0 {
            MatchStatus::Match
        } else {
            MatchStatus::Mismatch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Match => MATCH_STATUS,
            MatchStatus::Mismatch => MISMATCH_STATUS,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
