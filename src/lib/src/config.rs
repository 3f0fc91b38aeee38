//! Configuration for tabcompare, read from an optional TOML file
//!

pub mod compare_config;

pub use crate::config::compare_config::CompareConfig;
