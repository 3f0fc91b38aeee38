//! # PathBufError
//!
//! Wraps a path so it can be carried as the payload of an error variant.
//!

use std::fmt;
use std::path::{Path, PathBuf};

pub struct PathBufError(PathBuf);

impl PathBufError {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<&Path> for PathBufError {
    fn from(p: &Path) -> Self {
        PathBufError(p.to_path_buf())
    }
}

impl From<PathBuf> for PathBufError {
    fn from(p: PathBuf) -> Self {
        PathBufError(p)
    }
}

impl std::fmt::Display for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::fmt::Debug for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::error::Error for PathBufError {}
