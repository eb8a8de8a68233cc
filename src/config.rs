//! Store configuration
//!
//! Only the two file locations are configurable. Defaults match a `data/`
//! directory next to the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default data directory.
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default primary data file name.
pub const DATA_FILE_NAME: &str = "courses.txt";
/// Default backup file name.
pub const BACKUP_FILE_NAME: &str = "courses_backup.txt";

/// Locations of the primary data file and its single-generation backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Primary data file.
    pub data_file: PathBuf,
    /// Backup copy, overwritten on open and after every save.
    pub backup_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl StoreConfig {
    /// Default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            data_file: dir.join(DATA_FILE_NAME),
            backup_file: dir.join(BACKUP_FILE_NAME),
        }
    }

    /// Load a configuration from a JSON file; missing keys take defaults.
    ///
    /// ```json
    /// { "data_file": "roster/courses.txt", "backup_file": "roster/courses.bak" }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// names the same path for data and backup.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the store cannot operate on.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if either path is empty or both paths are equal.
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() || self.backup_file.as_os_str().is_empty() {
            return Err(Error::Config("data_file and backup_file must be set".to_string()));
        }
        if self.data_file == self.backup_file {
            return Err(Error::Config(format!(
                "backup_file must differ from data_file ({})",
                self.data_file.display()
            )));
        }
        Ok(())
    }
}
