use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::parser::ResolvedTimes;

/// Raw field values of one timetable paragraph, exactly as extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub name: String,
    pub code: String,
    pub section: String,
    pub delivery: String,
    pub professor: String,
    pub room: String,
    pub campus: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub start_date: String,
    pub end_date: String,
    pub penalty_date: String,
}

/// One weekly-recurring calendar event, immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub summary: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub created: DateTime<Utc>,
    pub uid: String,
    pub until: NaiveDate,
    /// Two-letter recurrence day code, taken verbatim from the source's
    /// day-of-week string ("Monday" becomes "Mo").
    pub weekday: String,
}

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub events: Vec<Event>,
}

impl Event {
    pub fn assemble(
        fields: &CourseFields,
        times: ResolvedTimes,
        display_name: &str,
        uid: String,
    ) -> Event {
        Event {
            summary: format!("{} {} ({})", fields.room, display_name, fields.delivery),
            start: times.start,
            end: times.end,
            created: Utc::now(),
            uid,
            until: times.until,
            weekday: fields.day.chars().take(2).collect(),
        }
    }
}
