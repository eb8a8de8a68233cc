//! Enrollment records
//!
//! A [`Record`] is one student/course/semester enrollment. Records are
//! replaced wholesale, never patched; the [`IdentityKey`] derived from a
//! record is what the registry keeps unique.
//!
//! ## Usage
//!
//! ```rust
//! use course_roster::record::{CourseType, Record};
//!
//! let record = Record::builder("123456", "ABC123", "2024-F")
//!     .student_name("john smith")
//!     .course_name("intro to cs")
//!     .hours(3)
//!     .credit(3.0)
//!     .kind("exam")
//!     .build();
//!
//! assert_eq!(record.course_type(), Some(CourseType::Exam));
//! assert_eq!(record.normalized().student_name(), "John Smith");
//! ```

mod enrollment;
mod identity;

pub use enrollment::{CourseType, Record, RecordBuilder};
pub use identity::IdentityKey;
