//! Offset rules for the timetable's home region.
//!
//! Eastern time switches to daylight saving at 02:00 on the second Sunday of
//! March and back at 02:00 on the first Sunday of November. The same two
//! rules are emitted as the calendar's VTIMEZONE block, so instants resolved
//! here and instants reconstructed by a calendar client agree.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, Weekday};
use once_cell::sync::Lazy;

pub const TZID: &str = "America/Toronto";

/// EST, UTC-5.
static STANDARD: Lazy<FixedOffset> = Lazy::new(|| FixedOffset::east_opt(-5 * 3600).unwrap());

/// EDT, UTC-4.
static DAYLIGHT: Lazy<FixedOffset> = Lazy::new(|| FixedOffset::east_opt(-4 * 3600).unwrap());

fn nth_sunday(year: i32, month: u32, n: u8) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n).unwrap()
}

fn dst_start(year: i32) -> NaiveDateTime {
    nth_sunday(year, 3, 2).and_hms_opt(2, 0, 0).unwrap()
}

fn dst_end(year: i32) -> NaiveDateTime {
    nth_sunday(year, 11, 1).and_hms_opt(2, 0, 0).unwrap()
}

/// Offset from UTC in effect at the given local wall-clock time.
pub fn utc_offset(local: NaiveDateTime) -> FixedOffset {
    let year = local.year();

    if local >= dst_start(year) && local < dst_end(year) {
        *DAYLIGHT
    } else {
        *STANDARD
    }
}
