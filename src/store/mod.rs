//! File store - line-oriented persistence with a single-generation backup
//!
//! The store never holds records; it streams them through
//! [`parse_line`]/[`serialize_record`] when called.
//!
//! ## Backup discipline
//!
//! - [`Store::open`] copies an existing data file over the backup.
//! - [`Store::save`] refreshes the backup after a successful write.
//! - [`Store::restore_from_backup`] writes the backup's records back over
//!   the data file.
//!
//! Only one backup generation is kept.
//!
//! ## Error reporting
//!
//! The plain methods return `bool`/`Vec` sentinels and log failures with
//! `tracing`. Each has a `try_*` twin returning [`Result`].
//!
//! ```rust,no_run
//! use course_roster::{Registry, Store, StoreConfig};
//!
//! # fn main() -> course_roster::Result<()> {
//! let store = Store::open(StoreConfig::in_dir("data"))?;
//! let mut registry = Registry::from_records(store.load());
//! // ... mutate registry ...
//! assert!(store.save(registry.records()));
//! # Ok(())
//! # }
//! ```

mod codec;

pub use codec::{parse_line, serialize_record, FIELD_COUNT};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::record::Record;
use crate::{Error, Result};

/// Line-oriented record store.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Open a store over `config`'s paths.
    ///
    /// Creates the data directory if needed and, if the data file exists,
    /// copies it over the backup. Directory and backup failures are logged,
    /// not returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is unusable.
    pub fn open(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let store = Self { config };

        if let Some(dir) = parent_dir(&store.config.data_file) {
            if let Err(e) = fs::create_dir_all(dir) {
                warn!(dir = %dir.display(), error = %e, "failed to create data directory");
            }
        }
        if let Err(e) = store.refresh_backup() {
            warn!(error = %e, "failed to create backup");
        }

        Ok(store)
    }

    /// Primary data file path.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Backup file path.
    #[must_use]
    pub fn backup_file(&self) -> &Path {
        &self.config.backup_file
    }

    /// Records from the data file; empty if it is missing or unreadable.
    #[must_use]
    pub fn load(&self) -> Vec<Record> {
        self.try_load().unwrap_or_else(|e| {
            warn!(path = %self.config.data_file.display(), error = %e, "failed to load data file");
            Vec::new()
        })
    }

    /// Records from the data file; a missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file exists but cannot be read.
    pub fn try_load(&self) -> Result<Vec<Record>> {
        if !Self::file_exists(&self.config.data_file) {
            debug!(path = %self.config.data_file.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        read_records(&self.config.data_file)
    }

    /// Write `records` to the data file, then refresh the backup.
    ///
    /// Returns `false` if the data file could not be written. A failed
    /// backup refresh is logged only.
    pub fn save(&self, records: &[Record]) -> bool {
        self.try_save(records)
            .map_err(|e| {
                warn!(path = %self.config.data_file.display(), error = %e, "failed to save data file");
            })
            .is_ok()
    }

    /// Write `records` to the data file, then refresh the backup.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the data file cannot be written; the previous
    /// data file is then left in place. Backup refresh failures are logged,
    /// not returned.
    pub fn try_save(&self, records: &[Record]) -> Result<()> {
        write_records(records, &self.config.data_file)?;
        // Records are on disk at this point; backup errors are logged only.
        if let Err(e) = self.refresh_backup() {
            warn!(backup = %self.config.backup_file.display(), error = %e, "failed to refresh backup");
        }
        info!(count = records.len(), path = %self.config.data_file.display(), "saved records");
        Ok(())
    }

    /// Records parsed from an arbitrary file; empty if it is missing or
    /// unreadable.
    #[must_use]
    pub fn import_from(&self, path: impl AsRef<Path>) -> Vec<Record> {
        let path = path.as_ref();
        self.try_import_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "import failed");
            Vec::new()
        })
    }

    /// Records parsed from an arbitrary file.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] if the file does not exist, or an IO error
    /// if it cannot be read.
    pub fn try_import_from(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        read_records(path)
    }

    /// Write `records` to an arbitrary file; returns `false` on failure.
    pub fn export_to(&self, records: &[Record], path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.try_export_to(records, path)
            .map_err(|e| warn!(path = %path.display(), error = %e, "export failed"))
            .is_ok()
    }

    /// Write `records` to an arbitrary file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory, temporary file, or rename fails.
    pub fn try_export_to(&self, records: &[Record], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_records(records, path)?;
        info!(count = records.len(), path = %path.display(), "exported records");
        Ok(())
    }

    /// Overwrite the data file with the backup's records.
    ///
    /// Returns `false` if there is no backup or the write fails; the data
    /// file is untouched in the first case.
    pub fn restore_from_backup(&self) -> bool {
        self.try_restore_from_backup()
            .map_err(|e| warn!(error = %e, "restore from backup failed"))
            .is_ok()
    }

    /// Overwrite the data file with the backup's records.
    ///
    /// # Errors
    ///
    /// [`Error::BackupMissing`] if no backup exists, or an IO error.
    pub fn try_restore_from_backup(&self) -> Result<()> {
        let backup = &self.config.backup_file;
        if !Self::file_exists(backup) {
            return Err(Error::BackupMissing(backup.clone()));
        }
        let records = read_records(backup)?;
        write_records(&records, &self.config.data_file)?;
        info!(count = records.len(), "restored data file from backup");
        Ok(())
    }

    /// Check whether `path` exists.
    #[must_use]
    pub fn file_exists(path: impl AsRef<Path>) -> bool {
        path.as_ref().exists()
    }

    /// Raw lines of a file.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] if the file does not exist, or an IO error.
    pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Ok(fs::read_to_string(path)?.lines().map(str::to_string).collect())
    }

    fn refresh_backup(&self) -> Result<()> {
        let data = &self.config.data_file;
        if !Self::file_exists(data) {
            return Ok(());
        }
        let backup = &self.config.backup_file;
        if let Some(dir) = parent_dir(backup) {
            fs::create_dir_all(dir)?;
        }
        fs::copy(data, backup)?;
        debug!(backup = %backup.display(), "backup refreshed");
        Ok(())
    }
}

#[cfg(feature = "tokio")]
impl Store {
    /// [`Store::import_from`] on the blocking thread pool.
    ///
    /// Only the file I/O moves off the caller's task; adding the records to
    /// a registry stays with the caller.
    pub async fn import_from_async(&self, path: impl Into<PathBuf>) -> Vec<Record> {
        let store = self.clone();
        let path = path.into();
        tokio::task::spawn_blocking(move || store.import_from(path))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "import task failed");
                Vec::new()
            })
    }

    /// [`Store::export_to`] on the blocking thread pool.
    pub async fn export_to_async(&self, records: Vec<Record>, path: impl Into<PathBuf>) -> bool {
        let store = self.clone();
        let path = path.into();
        tokio::task::spawn_blocking(move || store.export_to(&records, path))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "export task failed");
                false
            })
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| !dir.as_os_str().is_empty())
}

fn read_records(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)?;
    let mut skipped = 0usize;
    let records: Vec<Record> = contents
        .lines()
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .collect();

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped unparseable lines");
    }
    debug!(path = %path.display(), count = records.len(), "read records");
    Ok(records)
}

/// Write to a sibling temporary file and rename it over `path`.
fn write_records(records: &[Record], path: &Path) -> Result<()> {
    if let Some(dir) = parent_dir(path) {
        fs::create_dir_all(dir)?;
    }

    let tmp = temp_path(path);
    let written = write_lines(records, &tmp).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written.map_err(Error::from)
}

fn write_lines(records: &[Record], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", serialize_record(record))?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new("123456", "John Smith", "ABC123", "Intro To Cs", "2024-F", 3, 3.0, "exam")
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let tmp = temp_path(Path::new("data/courses.txt"));
        assert_eq!(tmp, Path::new("data/courses.txt.tmp"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("nested/out.txt");

        write_records(&[sample()], &path).expect("write records");
        assert!(!temp_path(&path).exists());

        let records = read_records(&path).expect("read records");
        assert_eq!(records, vec![sample()]);
    }

    #[test]
    fn test_open_creates_data_dir() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let config = StoreConfig::in_dir(dir.path().join("data"));
        let store = Store::open(config).expect("open store");

        assert!(dir.path().join("data").is_dir());
        assert!(!store.backup_file().exists());
        assert!(store.load().is_empty());
    }
}
