//! Enrollment registry - the authoritative in-memory roster
//!
//! The registry owns an insertion-ordered `Vec<Record>` and enforces two
//! rules on every mutation: records must pass
//! [`validate_record`](crate::validate::validate_record), and no two records
//! may share an [`IdentityKey`]. Datasets are small, so lookups are linear
//! scans.
//!
//! ## Concurrency
//!
//! There is no internal locking. Callers that touch a registry from several
//! threads wrap it in a mutex and hold the lock for the duration of each call.
//!
//! ## Example
//!
//! ```rust
//! use course_roster::{Record, Registry};
//!
//! let mut registry = Registry::new();
//! let record = Record::new(
//!     "123456", "john smith", "ABC123", "intro to cs", "2024-F", 3, 3.0, "exam",
//! );
//!
//! assert!(registry.add(record.clone()));
//! assert!(!registry.add(record));
//! assert_eq!(registry.all()[0].student_name(), "John Smith");
//! assert_eq!(registry.count_by_semester("2024-f"), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::{IdentityKey, Record};
use crate::text::clean;
use crate::validate::validate_record;
use crate::{Error, Result};

/// Outcome of a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Records admitted to the registry.
    pub added: usize,
    /// Records rejected as invalid or duplicate.
    pub skipped: usize,
}

impl ImportReport {
    /// Total records offered.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.skipped
    }
}

/// In-memory enrollment roster.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    records: Vec<Record>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded from `records`; invalid and duplicate
    /// entries are skipped.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut registry = Self::new();
        registry.import_many(records);
        registry
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record; returns `false` if it is invalid or its identity is taken.
    ///
    /// On success the record is normalized and appended. A rejected record
    /// leaves the registry untouched.
    pub fn add(&mut self, record: Record) -> bool {
        self.try_add(record).is_ok()
    }

    /// Add a record, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if a field fails validation, [`Error::Duplicate`]
    /// if another record already has the same identity.
    pub fn try_add(&mut self, record: Record) -> Result<()> {
        validate_record(&record)?;

        let key = record.identity();
        if self.position(&key).is_some() {
            debug!(%key, "rejected duplicate enrollment");
            return Err(duplicate(key));
        }

        debug!(%key, "enrollment added");
        self.records.push(record.normalized());
        Ok(())
    }

    /// Remove every record matching the identity triple.
    ///
    /// Returns `true` if at least one record was removed.
    pub fn remove(&mut self, student_id: &str, course_id: &str, semester: &str) -> bool {
        let key = IdentityKey::new(student_id, course_id, semester);
        let before = self.records.len();
        self.records.retain(|r| r.identity() != key);
        let removed = before - self.records.len();
        if removed > 0 {
            debug!(%key, removed, "enrollment removed");
        }
        removed > 0
    }

    /// Replace the record matching the identity triple with `record`.
    ///
    /// Returns `false` if nothing matches, `record` is invalid, or its
    /// identity collides with a record other than the one being replaced.
    pub fn modify(
        &mut self,
        student_id: &str,
        course_id: &str,
        semester: &str,
        record: Record,
    ) -> bool {
        self.try_modify(student_id, course_id, semester, record)
            .is_ok()
    }

    /// Replace the record matching the identity triple, reporting failures.
    ///
    /// Checks run in a fixed order: locate the target, validate `record`,
    /// then check its identity against every other record. Nothing is
    /// mutated unless all three pass; the replacement keeps the target's
    /// position.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`], [`Error::Validation`] or [`Error::Duplicate`].
    pub fn try_modify(
        &mut self,
        student_id: &str,
        course_id: &str,
        semester: &str,
        record: Record,
    ) -> Result<()> {
        let target = IdentityKey::new(student_id, course_id, semester);
        let Some(index) = self.position(&target) else {
            return Err(Error::NotFound {
                student_id: target.student_id().to_string(),
                course_id: target.course_id().to_string(),
                semester: target.semester().to_string(),
            });
        };

        validate_record(&record)?;

        let key = record.identity();
        let collides = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.identity() == key);
        if collides {
            debug!(%target, %key, "rejected modification onto existing enrollment");
            return Err(duplicate(key));
        }

        debug!(%target, %key, "enrollment modified");
        self.records[index] = record.normalized();
        Ok(())
    }

    /// All records for a student ID (cleaned exact match).
    #[must_use]
    pub fn find_by_student_id(&self, student_id: &str) -> Vec<Record> {
        let id = clean(student_id);
        if id.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| clean(r.student_id()) == id)
            .cloned()
            .collect()
    }

    /// Records whose student name or ID contains `keyword`, ignoring case.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<Record> {
        let needle = clean(keyword).to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                clean(r.student_name()).to_lowercase().contains(&needle)
                    || clean(r.student_id()).to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Records sorted by ascending credit; ties keep insertion order.
    #[must_use]
    pub fn sorted_by_credit(&self) -> Vec<Record> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| a.credit().total_cmp(&b.credit()));
        sorted
    }

    /// Number of records in `semester`.
    #[must_use]
    pub fn count_by_semester(&self, semester: &str) -> usize {
        let semester = semester_key(semester);
        if semester.is_empty() {
            return 0;
        }
        self.records
            .iter()
            .filter(|r| semester_key(r.semester()) == semester)
            .count()
    }

    /// Records in `semester`, in insertion order.
    #[must_use]
    pub fn by_semester(&self, semester: &str) -> Vec<Record> {
        let semester = semester_key(semester);
        if semester.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| semester_key(r.semester()) == semester)
            .cloned()
            .collect()
    }

    /// Check whether a record with this identity triple exists.
    #[must_use]
    pub fn contains(&self, student_id: &str, course_id: &str, semester: &str) -> bool {
        self.position(&IdentityKey::new(student_id, course_id, semester))
            .is_some()
    }

    /// Add each record in turn, returning how many were admitted.
    pub fn import_many(&mut self, records: impl IntoIterator<Item = Record>) -> usize {
        self.import_report(records).added
    }

    /// Add each record in turn, counting admitted and skipped entries.
    pub fn import_report(&mut self, records: impl IntoIterator<Item = Record>) -> ImportReport {
        let mut report = ImportReport::default();
        for record in records {
            if self.add(record) {
                report.added += 1;
            } else {
                report.skipped += 1;
            }
        }
        debug!(added = report.added, skipped = report.skipped, "import finished");
        report
    }

    /// Copy of every record in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Borrowing view of every record in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn position(&self, key: &IdentityKey) -> Option<usize> {
        self.records.iter().position(|r| &r.identity() == key)
    }
}

fn semester_key(semester: &str) -> String {
    clean(semester).to_ascii_uppercase()
}

fn duplicate(key: IdentityKey) -> Error {
    Error::Duplicate {
        student_id: key.student_id().to_string(),
        course_id: key.course_id().to_string(),
        semester: key.semester().to_string(),
    }
}
