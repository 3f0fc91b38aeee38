pub mod compare_opts;

pub use crate::opts::compare_opts::CompareOpts;
