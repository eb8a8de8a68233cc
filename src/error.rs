//! Error types for the course roster
//!
//! The boolean entry points on [`Registry`](crate::registry::Registry) and
//! [`Store`](crate::store::Store) collapse these into `false`/empty results;
//! the `try_*` variants surface them for callers that need the distinction.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Course roster error types
#[derive(Error, Debug)]
pub enum Error {
    /// A field failed its format or range check
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Another record already holds this identity triple
    #[error("Duplicate enrollment: student {student_id}, course {course_id}, semester {semester}")]
    Duplicate {
        /// Cleaned student ID
        student_id: String,
        /// Cleaned course ID
        course_id: String,
        /// Cleaned semester
        semester: String,
    },

    /// No record matches the identity triple
    #[error("No enrollment for student {student_id}, course {course_id}, semester {semester}")]
    NotFound {
        /// Cleaned student ID
        student_id: String,
        /// Cleaned course ID
        course_id: String,
        /// Cleaned semester
        semester: String,
    },

    /// Restore requested but no backup file exists
    #[error("Backup file not found: {}", .0.display())]
    BackupMissing(PathBuf),

    /// File to read does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Store configuration could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (configuration files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
