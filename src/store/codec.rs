//! Line codec
//!
//! One record per line, eight comma-separated fields:
//!
//! ```text
//! studentId,studentName,courseId,courseName,semester,hours,credit,type
//! 123456,John Smith,ABC123,Intro To Cs,2024-F,3,3.0,exam
//! ```
//!
//! Credit is written with one fractional digit, ties rounded away from zero
//! (`2.25` is written `2.3`). There is no escaping, so a field containing a
//! comma produces a line that no longer parses.
//!
//! Parsing trims every string field, so `parse_line(serialize_record(r))`
//! reproduces `r` for records as the registry stores them (see
//! [`Record::normalized`]); padding on a raw record does not survive.

use crate::record::Record;

/// Number of fields on a well-formed line.
pub const FIELD_COUNT: usize = 8;

/// Parse one line into a record.
///
/// Returns `None` if the line does not have exactly eight fields or if hours
/// or credit are not numbers. String fields are trimmed; business rules are
/// not checked here.
#[must_use]
pub fn parse_line(line: &str) -> Option<Record> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let hours = fields[5].parse::<i32>().ok()?;
    let credit = fields[6].parse::<f64>().ok()?;

    Some(Record::new(
        fields[0], fields[1], fields[2], fields[3], fields[4], hours, credit, fields[7],
    ))
}

/// Format a record as one line (without the trailing newline).
#[must_use]
pub fn serialize_record(record: &Record) -> String {
    format!(
        "{},{},{},{},{},{},{:.1},{}",
        record.student_id(),
        record.student_name(),
        record.course_id(),
        record.course_name(),
        record.semester(),
        record.hours(),
        round_tenths(record.credit()),
        record.kind()
    )
}

/// Round to one decimal place, ties away from zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
