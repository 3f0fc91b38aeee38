//! # Report
//!
//! Writes a [`CompareResult`](crate::model::CompareResult) to disk.
//!

pub mod xlsx;

pub use crate::core::report::xlsx::save_report;
