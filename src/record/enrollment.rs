//! Enrollment Record - one student in one course for one semester

use std::fmt;

use serde::{Deserialize, Serialize};

use super::IdentityKey;
use crate::text::{capitalize_words, clean};

/// Assessment type of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Graded by final exam.
    Exam,
    /// Pass/fail check.
    Check,
}

impl CourseType {
    /// Parse `exam`/`check`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("exam") {
            Some(Self::Exam)
        } else if s.eq_ignore_ascii_case("check") {
            Some(Self::Check)
        } else {
            None
        }
    }

    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exam => "exam",
            Self::Check => "check",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enrollment Record for a student, a course and a semester.
///
/// Construction does not validate; see
/// [`validate_record`](crate::validate::validate_record). The course type is
/// kept as the raw string it was given so that files round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    student_id: String,
    student_name: String,
    course_id: String,
    course_name: String,
    semester: String,
    hours: i32,
    credit: f64,
    kind: String,
}

impl Record {
    /// Create a record from all eight fields, in file order.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        semester: impl Into<String>,
        hours: i32,
        credit: f64,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            course_id: course_id.into(),
            course_name: course_name.into(),
            semester: semester.into(),
            hours,
            credit,
            kind: kind.into(),
        }
    }

    /// Create a builder seeded with the identity fields.
    #[must_use]
    pub fn builder(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        semester: impl Into<String>,
    ) -> RecordBuilder {
        RecordBuilder::new(student_id, course_id, semester)
    }

    /// Get the student ID.
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Get the student name.
    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Get the course ID.
    #[must_use]
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Get the course name.
    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// Get the semester (`YYYY-F` / `YYYY-S`).
    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// Get the contact hours.
    #[must_use]
    pub const fn hours(&self) -> i32 {
        self.hours
    }

    /// Get the credit value.
    #[must_use]
    pub const fn credit(&self) -> f64 {
        self.credit
    }

    /// Get the course type exactly as stored.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Parsed course type, if the stored string is recognised.
    #[must_use]
    pub fn course_type(&self) -> Option<CourseType> {
        CourseType::parse(&self.kind)
    }

    /// The cleaned (student ID, course ID, semester) uniqueness key.
    #[must_use]
    pub fn identity(&self) -> IdentityKey {
        IdentityKey::new(&self.student_id, &self.course_id, &self.semester)
    }

    /// Normalized copy as admitted to the registry.
    ///
    /// Names are capitalized per word, the course ID and semester are cleaned
    /// and upper-cased, and the student ID is cleaned. Hours, credit and the
    /// course type are untouched.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            student_id: clean(&self.student_id),
            student_name: capitalize_words(&self.student_name),
            course_id: clean(&self.course_id).to_ascii_uppercase(),
            course_name: capitalize_words(&self.course_name),
            semester: clean(&self.semester).to_ascii_uppercase(),
            ..self
        }
    }

    /// Multi-line summary card.
    ///
    /// ```text
    /// Student: John Smith (123456)
    /// Course: Intro To Cs (ABC123)
    /// Semester: 2024-F
    /// Hours: 3 | Credit: 3.0 | Type: exam
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Student: {} ({})\nCourse: {} ({})\nSemester: {}\nHours: {} | Credit: {:.1} | Type: {}",
            self.student_name,
            self.student_id,
            self.course_name,
            self.course_id,
            self.semester,
            self.hours,
            self.credit,
            self.kind
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}, Name: {}, Course ID: {}, Course: {}, Semester: {}, Hours: {}, Credit: {:.1}, Type: {}",
            self.student_id,
            self.student_name,
            self.course_id,
            self.course_name,
            self.semester,
            self.hours,
            self.credit,
            self.kind
        )
    }
}

/// Builder for `Record`.
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a new builder with the identity fields; everything else is
    /// empty or zero until set.
    #[must_use]
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        semester: impl Into<String>,
    ) -> Self {
        Self {
            record: Record::new(student_id, "", course_id, "", semester, 0, 0.0, ""),
        }
    }

    /// Set the student name.
    #[must_use]
    pub fn student_name(mut self, name: impl Into<String>) -> Self {
        self.record.student_name = name.into();
        self
    }

    /// Set the course name.
    #[must_use]
    pub fn course_name(mut self, name: impl Into<String>) -> Self {
        self.record.course_name = name.into();
        self
    }

    /// Set the contact hours.
    #[must_use]
    pub const fn hours(mut self, hours: i32) -> Self {
        self.record.hours = hours;
        self
    }

    /// Set the credit value.
    #[must_use]
    pub const fn credit(mut self, credit: f64) -> Self {
        self.record.credit = credit;
        self
    }

    /// Set the course type string.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.record.kind = kind.into();
        self
    }

    /// Build the `Record`.
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "123456", "john smith", "abc123", "intro to cs", "2024-f", 3, 3.0, "exam",
        )
    }

    #[test]
    fn test_builder_matches_new() {
        let built = Record::builder("123456", "abc123", "2024-f")
            .student_name("john smith")
            .course_name("intro to cs")
            .hours(3)
            .credit(3.0)
            .kind("exam")
            .build();
        assert_eq!(built, sample());
    }

    #[test]
    fn test_normalized() {
        let record = sample().normalized();
        assert_eq!(record.student_name(), "John Smith");
        assert_eq!(record.course_name(), "Intro To Cs");
        assert_eq!(record.course_id(), "ABC123");
        assert_eq!(record.semester(), "2024-F");
        assert_eq!(record.kind(), "exam");
    }

    #[test]
    fn test_course_type() {
        assert_eq!(CourseType::parse(" CHECK "), Some(CourseType::Check));
        assert_eq!(CourseType::parse("Exam"), Some(CourseType::Exam));
        assert_eq!(CourseType::parse("quiz"), None);
        assert_eq!(sample().course_type(), Some(CourseType::Exam));
        assert_eq!(CourseType::Check.to_string(), "check");
    }

    #[test]
    fn test_display_and_describe() {
        let record = sample().normalized();
        assert_eq!(
            record.to_string(),
            "Student ID: 123456, Name: John Smith, Course ID: ABC123, Course: Intro To Cs, \
             Semester: 2024-F, Hours: 3, Credit: 3.0, Type: exam"
        );
        assert_eq!(
            record.describe(),
            "Student: John Smith (123456)\nCourse: Intro To Cs (ABC123)\nSemester: 2024-F\n\
             Hours: 3 | Credit: 3.0 | Type: exam"
        );
    }

    #[test]
    fn test_serde_json() {
        let record = sample();
        let json = serde_json::to_string(&record).expect("serialize");
        let back: Record = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, back);
    }
}
