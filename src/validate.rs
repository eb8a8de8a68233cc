//! Field validation
//!
//! Pure predicates over raw field values plus [`validate_record`], which
//! reports the first failing field as a [`ValidationError`]. Nothing here
//! has side effects; turning a failure into a user-facing alert is the
//! caller's job.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::Record;

static STUDENT_ID: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{6}$"));
static COURSE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[A-Za-z]{3}[0-9]{3}$"));
static SEMESTER: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]{4}-[FSfs]$"));
static COURSE_TYPE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^(?i:exam|check)$"));
// ASCII letters, spaces and a little punctuation; commas are excluded since
// they are the field delimiter on disk.
static NAME: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[A-Za-z][A-Za-z .'\-]*$"));
static COURSE_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9][A-Za-z0-9 .'&:()+#/\-]*$"));

// A pattern that fails to compile matches nothing.
fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn matches(pattern: &LazyLock<Option<Regex>>, s: &str) -> bool {
    Option::as_ref(pattern).is_some_and(|re| re.is_match(s))
}

/// Which field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationKind {
    /// Six-digit student ID
    StudentId,
    /// Student name
    StudentName,
    /// Three letters followed by three digits
    CourseId,
    /// Course name
    CourseName,
    /// `YYYY-F` or `YYYY-S`
    Semester,
    /// Contact hours
    Hours,
    /// Credit value
    Credit,
    /// `exam` or `check`
    CourseType,
}

/// Structured validation outcome: the failing field and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationKind,
    message: String,
}

impl ValidationError {
    /// Create a validation error for `kind` with the default message.
    #[must_use]
    pub fn new(kind: ValidationKind) -> Self {
        Self {
            kind,
            message: default_message(kind).to_string(),
        }
    }

    /// The field that failed.
    #[must_use]
    pub const fn kind(&self) -> ValidationKind {
        self.kind
    }

    /// Human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

const fn default_message(kind: ValidationKind) -> &'static str {
    match kind {
        ValidationKind::StudentId => "Student ID must be 6 digits",
        ValidationKind::StudentName => {
            "Student name must be non-empty letters, spaces, apostrophes, periods or hyphens"
        }
        ValidationKind::CourseId => "Course ID must be 3 letters followed by 3 digits",
        ValidationKind::CourseName => {
            "Course name must be non-empty and must not contain commas or unsupported symbols"
        }
        ValidationKind::Semester => "Semester must be in YYYY-F or YYYY-S format",
        ValidationKind::Hours => "Hours must be positive",
        ValidationKind::Credit => "Credit must be positive",
        ValidationKind::CourseType => "Course type must be 'exam' or 'check'",
    }
}

/// Six ASCII digits: `^[0-9]{6}$`
#[must_use]
pub fn is_valid_student_id(s: &str) -> bool {
    matches(&STUDENT_ID, s)
}

/// Three letters then three digits: `^[A-Za-z]{3}[0-9]{3}$`
#[must_use]
pub fn is_valid_course_id(s: &str) -> bool {
    matches(&COURSE_ID, s)
}

/// Year and term: `^[0-9]{4}-[FSfs]$`
#[must_use]
pub fn is_valid_semester(s: &str) -> bool {
    matches(&SEMESTER, s)
}

/// Case-insensitive `exam` or `check`.
#[must_use]
pub fn is_valid_course_type(s: &str) -> bool {
    matches(&COURSE_TYPE, s)
}

/// Non-empty after trimming, ASCII letters with spaces, `'`, `.` and `-`.
#[must_use]
pub fn is_valid_name(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && matches(&NAME, trimmed)
}

/// Non-empty after trimming, letters, digits, spaces and limited punctuation.
#[must_use]
pub fn is_valid_course_name(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && matches(&COURSE_NAME, trimmed)
}

/// Strictly positive hour count.
#[must_use]
pub const fn is_valid_hours(hours: i32) -> bool {
    hours > 0
}

/// Strictly positive, finite credit.
#[must_use]
pub fn is_valid_credit(credit: f64) -> bool {
    credit.is_finite() && credit > 0.0
}

/// Check every field of `record`, reporting the first failure.
///
/// Fields are checked in the order student ID, course ID, semester, hours,
/// credit, course type, student name, course name.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first field that fails.
pub fn validate_record(record: &Record) -> Result<(), ValidationError> {
    let checks = [
        (is_valid_student_id(record.student_id()), ValidationKind::StudentId),
        (is_valid_course_id(record.course_id()), ValidationKind::CourseId),
        (is_valid_semester(record.semester()), ValidationKind::Semester),
        (is_valid_hours(record.hours()), ValidationKind::Hours),
        (is_valid_credit(record.credit()), ValidationKind::Credit),
        (is_valid_course_type(record.kind()), ValidationKind::CourseType),
        (is_valid_name(record.student_name()), ValidationKind::StudentName),
        (is_valid_course_name(record.course_name()), ValidationKind::CourseName),
    ];

    match checks.into_iter().find(|(ok, _)| !ok) {
        Some((_, kind)) => Err(ValidationError::new(kind)),
        None => Ok(()),
    }
}
