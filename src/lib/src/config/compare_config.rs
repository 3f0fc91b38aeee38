use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TabCompareError;
use crate::opts::CompareOpts;

/// Every field is optional so a config file can hold a subset of the values
/// and the command line can supply the rest.
///
/// ```toml
/// file_1 = "data/before.csv"
/// file_2 = "data/after.xlsx"
/// key_column = "player_id"
/// output_dir = "reports"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CompareConfig {
    pub file_1: Option<PathBuf>,
    pub file_2: Option<PathBuf>,
    pub key_column: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl CompareConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<CompareConfig, TabCompareError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TabCompareError::path_does_not_exist(path));
        }
        log::debug!("CompareConfig::from_path {:?}", path);
        let contents = fs::read_to_string(path)?;
        CompareConfig::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<CompareConfig, TabCompareError> {
        Ok(toml::from_str(contents)?)
    }

    /// Values set in `overrides` win.
    pub fn merge(self, overrides: CompareConfig) -> CompareConfig {
        CompareConfig {
            file_1: overrides.file_1.or(self.file_1),
            file_2: overrides.file_2.or(self.file_2),
            key_column: overrides.key_column.or(self.key_column),
            output_dir: overrides.output_dir.or(self.output_dir),
        }
    }

    pub fn to_opts(&self) -> Result<CompareOpts, TabCompareError> {
        let Some(file_1) = &self.file_1 else {
            return Err(TabCompareError::missing_argument("file_1"));
        };
        let Some(file_2) = &self.file_2 else {
            return Err(TabCompareError::missing_argument("file_2"));
        };
        let Some(key_column) = &self.key_column else {
            return Err(TabCompareError::missing_argument("key_column"));
        };

        let opts = CompareOpts::new(file_1, file_2, key_column);
        match &self.output_dir {
            Some(output_dir) => Ok(opts.with_output_dir(output_dir)),
            None => Ok(opts),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::config::CompareConfig;
    use crate::error::TabCompareError;
    use crate::test;

    #[test]
    fn test_config_from_path() -> Result<(), TabCompareError> {
        test::run_empty_dir_test(|dir| {
            let path = test::write_txt_file_to_path(
                dir.join("tabcompare.toml"),
                "file_1 = \"before.csv\"\nkey_column = \"id\"\n",
            )?;
            let config = CompareConfig::from_path(&path)?;
            assert_eq!(config.file_1, Some(PathBuf::from("before.csv")));
            assert_eq!(config.file_2, None);
            assert_eq!(config.key_column, Some("id".to_string()));
            Ok(())
        })
    }

    #[test]
    fn test_config_merge_prefers_overrides() -> Result<(), TabCompareError> {
        let config = CompareConfig::from_toml(
            "file_1 = \"a.csv\"\nfile_2 = \"b.csv\"\nkey_column = \"id\"\noutput_dir = \"out\"\n",
        )?;
        let overrides = CompareConfig {
            key_column: Some("player_id".to_string()),
            ..CompareConfig::default()
        };

        let opts = config.merge(overrides).to_opts()?;
        assert_eq!(opts.path_1, Path::new("a.csv"));
        assert_eq!(opts.path_2, Path::new("b.csv"));
        assert_eq!(opts.key_column, "player_id");
        assert_eq!(opts.output_dir, Path::new("out"));
        Ok(())
    }

    #[test]
    fn test_config_missing_key_column() {
        let config = CompareConfig {
            file_1: Some(PathBuf::from("a.csv")),
            file_2: Some(PathBuf::from("b.csv")),
            ..CompareConfig::default()
        };
        let err = config.to_opts().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("key_column"));
    }

    #[test]
    fn test_config_default_output_dir() -> Result<(), TabCompareError> {
        let config = CompareConfig::from_toml("file_1 = \"a.csv\"\nfile_2 = \"b.csv\"\nkey_column = \"id\"\n")?;
        let opts = config.to_opts()?;
        assert_eq!(opts.output_dir, Path::new("."));
        Ok(())
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = CompareConfig::from_toml("file_1 = [");
        assert!(matches!(result, Err(TabCompareError::TomlDe(_))));
    }
}
