mod convert;
mod error;
mod names;
mod parser;
mod structs;
mod tz;

mod ics;

pub use convert::{Converter, MismatchPolicy};
pub use error::ConvertError;
pub use names::{NameResolver, Prompt, Reconciler};
pub use parser::{paragraphs, parse_course, resolve_times, ResolvedTimes, COURSE_GRAMMAR};
pub use structs::{CourseFields, Event, Schedule};
