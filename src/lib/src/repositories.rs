//! # Repositories
//!
//! Operations over tables that are already loaded in memory
//!

pub mod compare;

pub use crate::repositories::compare::compare;
