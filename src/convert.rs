use std::collections::HashSet;

use log::{debug, error, warn};
use uuid::Uuid;

use crate::error::{ConvertError, Result};
use crate::names::{NameResolver, Reconciler};
use crate::parser::{paragraphs, parse_course, resolve_times};
use crate::structs::{Event, Schedule};

/// What to do with a paragraph the grammar rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Log the paragraph and keep going.
    #[default]
    Skip,
    /// Fail the whole run on the first bad paragraph.
    Abort,
}

/// Drives the timetable text through matching, time resolution, name
/// reconciliation and event assembly, one paragraph at a time.
pub struct Converter<R> {
    reconciler: Reconciler<R>,
    events: Vec<Event>,
    issued_uids: HashSet<String>,
    policy: MismatchPolicy,
}

impl<R: NameResolver> Converter<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_policy(resolver, MismatchPolicy::default())
    }

    pub fn with_policy(resolver: R, policy: MismatchPolicy) -> Self {
        Self {
            reconciler: Reconciler::new(resolver),
            events: Vec::new(),
            issued_uids: HashSet::new(),
            policy,
        }
    }

    /// Converts every paragraph of `text` into a recurring event, in file
    /// order. A paragraph either yields one complete event or none.
    pub fn convert(&mut self, text: &str) -> Result<()> {
        for paragraph in paragraphs(text) {
            match self.add_course(paragraph) {
                Ok(()) => {}
                // A failing prompt leaves later paragraphs unanswerable too.
                Err(err @ ConvertError::Prompt(_)) => return Err(err),
                Err(err) if self.policy == MismatchPolicy::Abort => return Err(err),
                Err(err) => error!("skipping paragraph: {err}"),
            }
        }

        Ok(())
    }

    fn add_course(&mut self, paragraph: &str) -> Result<()> {
        debug!("parsing paragraph: {paragraph}");

        let fields = parse_course(paragraph)?;
        debug!("extracted fields: {fields:?}");

        let times = resolve_times(&fields)?;
        let display_name = self.reconciler.display_name(&fields.name)?;
        let uid = self.next_uid();

        self.events.push(Event::assemble(&fields, times, &display_name, uid));
        Ok(())
    }

    fn next_uid(&mut self) -> String {
        loop {
            let uid = Uuid::new_v4().to_string();
            if self.issued_uids.insert(uid.clone()) {
                return uid;
            }
            warn!("uid {uid} already issued, drawing another");
        }
    }

    pub fn into_schedule(self) -> Schedule {
        Schedule {
            events: self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::names::NameResolver;

    struct Scripted(Vec<&'static str>);

    impl NameResolver for Scripted {
        fn resolve(&mut self, _raw: &str) -> io::Result<String> {
            Ok(self.0.remove(0).to_string())
        }
    }

    struct BrokenPipe;

    impl NameResolver for BrokenPipe {
        fn resolve(&mut self, _raw: &str) -> io::Result<String> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn course(name: &str, delivery: &str, room: &str) -> String {
        format!(
            "Course Name: {name}\n\
             Course Code: CST8102\n\
             Section: 300\n\
             Delivery: {delivery}\n\
             Professor: Ada Lovelace\n\
             Room Number: Location: {room}, Woodroffe\n\
             Day of Class: Monday\n\
             Time: 14:00 until 16:30\n\
             Start Date: 06-May-2024\n\
             End Date: 05-Aug-2024\n\
             Academic Penalty Withdrawal Date: 12-Jul-2024"
        )
    }

    #[test]
    fn empty_input_yields_an_empty_schedule() {
        let mut converter = Converter::new(Scripted(vec![]));
        converter.convert("").unwrap();
        assert!(converter.into_schedule().events.is_empty());
    }

    #[test]
    fn theory_and_lab_share_one_name_decision() {
        let text = format!(
            "{}\n\n{}",
            course("Intro to Systems", "Theory", "B119"),
            course("Intro to Systems", "Lab", "B120"),
        );

        // One scripted reply: a second prompt would panic.
        let mut converter = Converter::new(Scripted(vec!["Systems"]));
        converter.convert(&text).unwrap();

        let schedule = converter.into_schedule();
        assert_eq!(schedule.events.len(), 2);
        assert_eq!(schedule.events[0].summary, "B119 Systems (Theory)");
        assert_eq!(schedule.events[1].summary, "B120 Systems (Lab)");
    }

    #[test]
    fn skip_policy_keeps_going_past_a_bad_paragraph() {
        let bad = course("Broken", "Theory", "B200").replace("Professor: Ada Lovelace\n", "");
        let text = format!(
            "{}\n\n{bad}\n\n{}",
            course("First", "Theory", "B100"),
            course("Third", "Theory", "B300"),
        );

        let mut converter = Converter::new(Scripted(vec!["", ""]));
        converter.convert(&text).unwrap();

        let schedule = converter.into_schedule();
        assert_eq!(schedule.events.len(), 2);
        assert_eq!(schedule.events[0].summary, "B100 First (Theory)");
        assert_eq!(schedule.events[1].summary, "B300 Third (Theory)");
    }

    #[test]
    fn abort_policy_fails_the_run() {
        let bad = course("Broken", "Theory", "B200").replace("Professor: Ada Lovelace\n", "");
        let text = format!("{}\n\n{bad}", course("First", "Theory", "B100"));

        let mut converter = Converter::with_policy(Scripted(vec![""]), MismatchPolicy::Abort);
        let err = converter.convert(&text).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedParagraph(_)));
    }

    #[test]
    fn prompt_failure_is_fatal_even_when_skipping() {
        let mut converter = Converter::new(BrokenPipe);
        let err = converter.convert(&course("First", "Theory", "B100")).unwrap_err();
        assert!(matches!(err, ConvertError::Prompt(_)));
    }

    #[test]
    fn uids_are_pairwise_distinct() {
        let text = (0..8)
            .map(|i| course(&format!("Course {i}"), "Theory", "B100"))
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut converter = Converter::new(Scripted(vec![""; 8]));
        converter.convert(&text).unwrap();

        let schedule = converter.into_schedule();
        let uids: HashSet<&str> = schedule.events.iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(uids.len(), schedule.events.len());
    }
}
