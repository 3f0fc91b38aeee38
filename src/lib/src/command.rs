//! # tabcompare commands - entry point for all tabcompare commands
//!
//! Top level commands, each one reads its inputs, does the work and writes its outputs
//!

pub mod compare;
pub mod df;

pub use crate::command::compare::compare;
pub use crate::command::df::schema;
