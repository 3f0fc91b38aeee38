//! Core functionality for tabcompare
//!

pub mod df;
pub mod report;
