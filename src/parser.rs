use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConvertError, Result};
use crate::structs::CourseFields;
use crate::tz;

macro_rules! pattern {
    ($query:expr) => {{
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new($query).unwrap());
        &PATTERN
    }};
}

/// Labeled-field grammar of the college's timetable export.
///
/// One paragraph describes one course meeting: a fixed sequence of
/// `Label: value` pairs where any run of whitespace (including line breaks)
/// separates a value from the next label. Values are matched non-greedily up
/// to the following label. Supporting a different institution's export means
/// swapping this pattern, not touching the pipeline.
pub const COURSE_GRAMMAR: &str = r"(?x)
    Course\s+Name:\s*(?P<name>.+?)\s+
    Course\s+Code:\s*(?P<code>.+?)\s+
    Section:\s*(?P<section>.+?)\s+
    Delivery:\s*(?P<delivery>.+?)\s+
    Professor:\s*(?P<professor>.+?)\s+
    Room\s+Number:\s+Location:\s*(?P<room>.+?),\s*(?P<campus>.+?)\s+
    Day\s+of\s+Class:\s*(?P<day>.+?)\s+
    Time:\s*(?P<start_time>.+?)\s+until\s+(?P<end_time>.+?)\s+
    Start\s+Date:\s*(?P<start_date>.+?)\s+
    End\s+Date:\s*(?P<end_date>.+?)\s+
    Academic\s+Penalty\s+Withdrawal\s+Date:\s*(?P<penalty_date>.+)
";

pub const DATE_FORMAT: &str = "%d-%b-%Y";
pub const TIME_FORMAT: &str = "%H:%M";

/// Splits the source text into paragraphs separated by one or more blank
/// lines. Trailing content without a final blank line still yields a
/// paragraph; empty input yields nothing.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    pattern!(r"(?:\r?\n){2,}")
        .split(text)
        .map(|block| block.trim_matches(&['\r', '\n'][..]))
        .filter(|block| !block.trim().is_empty())
}

/// Matches one paragraph against [`COURSE_GRAMMAR`].
pub fn parse_course(paragraph: &str) -> Result<CourseFields> {
    let captures = pattern!(COURSE_GRAMMAR)
        .captures(paragraph)
        .ok_or_else(|| ConvertError::MalformedParagraph(paragraph.to_string()))?;

    let field = |name: &str| captures[name].to_string();

    Ok(CourseFields {
        name: field("name"),
        code: field("code"),
        section: field("section"),
        delivery: field("delivery"),
        professor: field("professor"),
        room: field("room"),
        campus: field("campus"),
        day: field("day"),
        start_time: field("start_time"),
        end_time: field("end_time"),
        start_date: field("start_date"),
        end_date: field("end_date"),
        penalty_date: field("penalty_date"),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimes {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Last date on which an occurrence may fall, inclusive.
    pub until: NaiveDate,
}

/// Turns the extracted date and time strings into timezone-aware instants.
///
/// Start and end share the calendar date of the first class. The recurrence
/// termination date is the last class date plus one day: recurrence
/// evaluation treats the boundary as exclusive, and the raw end date would
/// drop the final class.
pub fn resolve_times(fields: &CourseFields) -> Result<ResolvedTimes> {
    let first_class = parse_date(&fields.start_date)?;
    let start_time = parse_time(&fields.start_time)?;
    let end_time = parse_time(&fields.end_time)?;
    let until = parse_date(&fields.end_date)? + Duration::days(1);

    Ok(ResolvedTimes {
        start: zoned(first_class.and_time(start_time)),
        end: zoned(first_class.and_time(end_time)),
        until,
    })
}

fn zoned(local: NaiveDateTime) -> DateTime<FixedOffset> {
    let offset = tz::utc_offset(local);
    DateTime::from_naive_utc_and_offset(local - offset, offset)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ConvertError::MalformedDate(s.to_string()))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| ConvertError::MalformedTime(s.to_string()))
}
