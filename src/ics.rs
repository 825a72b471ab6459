use ics::parameters::TzIDParam;
use ics::properties::{DtEnd, DtStart, RRule, Summary, TzName};
use ics::{Daylight, ICalendar, Standard, TimeZone};

use crate::structs::{Event, Schedule};
use crate::tz;

const PRODID: &str = "-//timetable-to-ics//EN";

impl Schedule {
    #[must_use]
    pub fn to_ics(&self) -> ICalendar<'_> {
        let mut est_standard = Standard::new("19701101T000000", "-0400", "-0500");
        est_standard.push(TzName::new("EST"));
        est_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=11;BYDAY=1SU"));

        let mut edt_daylight = Daylight::new("19700308T000000", "-0500", "-0400");
        edt_daylight.push(TzName::new("EDT"));
        edt_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=3;BYDAY=2SU"));

        let mut timezone = TimeZone::daylight(tz::TZID, edt_daylight);
        timezone.add_standard(est_standard);

        let mut icalendar = ICalendar::new("2.0", PRODID);
        icalendar.add_timezone(timezone);

        for event in &self.events {
            icalendar.add_event(event.to_ics());
        }

        icalendar
    }
}

impl Event {
    #[must_use]
    pub fn to_ics(&self) -> ics::Event<'_> {
        let stamp = self.created.format("%Y%m%dT%H%M%SZ").to_string();
        let mut ics_event = ics::Event::new(self.uid.as_str(), stamp);

        let mut dtstart = DtStart::new(self.start.format("%Y%m%dT%H%M%S").to_string());
        dtstart.add(TzIDParam::new(tz::TZID));
        ics_event.push(dtstart);

        let mut dtend = DtEnd::new(self.end.format("%Y%m%dT%H%M%S").to_string());
        dtend.add(TzIDParam::new(tz::TZID));
        ics_event.push(dtend);

        ics_event.push(Summary::new(&self.summary));
        ics_event.push(RRule::new(format!(
            "FREQ=WEEKLY;UNTIL={};BYDAY={}",
            self.until.format("%Y%m%d"),
            self.weekday
        )));

        ics_event
    }
}
