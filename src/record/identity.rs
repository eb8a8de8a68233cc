//! Identity key - the registry's uniqueness triple

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::clean;

/// Cleaned (student ID, course ID, semester) triple.
///
/// Each component is whitespace-cleaned. Course IDs and semesters are stored
/// upper-cased, so those two components are upper-cased here as well; the
/// comparison itself is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityKey {
    student_id: String,
    course_id: String,
    semester: String,
}

impl IdentityKey {
    /// Build a key from raw (uncleaned) components.
    #[must_use]
    pub fn new(student_id: &str, course_id: &str, semester: &str) -> Self {
        Self {
            student_id: clean(student_id),
            course_id: clean(course_id).to_ascii_uppercase(),
            semester: clean(semester).to_ascii_uppercase(),
        }
    }

    /// Cleaned student ID.
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Cleaned, upper-cased course ID.
    #[must_use]
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Cleaned, upper-cased semester.
    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.student_id, self.course_id, self.semester)
    }
}
