use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct CompareOpts {
    pub path_1: PathBuf,
    pub path_2: PathBuf,
    pub key_column: String,
    pub output_dir: PathBuf,
}

impl CompareOpts {
    /// Writes the report to the current working directory.
    pub fn new(
        path_1: impl AsRef<Path>,
        path_2: impl AsRef<Path>,
        key_column: impl AsRef<str>,
    ) -> CompareOpts {
        CompareOpts {
            path_1: path_1.as_ref().to_path_buf(),
            path_2: path_2.as_ref().to_path_buf(),
            key_column: key_column.as_ref().to_string(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> CompareOpts {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }
}
