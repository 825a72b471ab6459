//! Course names in the export are often unwieldy ("CST8102 - Operating
//! System Fundamentals Sec. 300"). Each distinct raw name is offered to the
//! operator once; the answer is reused for every later occurrence, so the
//! Theory and Lab paragraphs of one course share a display name.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Produces a display name for a raw course name.
///
/// An empty reply keeps the raw name. Implementations may be interactive,
/// a static lookup table, or a heuristic; the pipeline only sees this trait.
pub trait NameResolver {
    fn resolve(&mut self, raw: &str) -> io::Result<String>;
}

/// Interactive resolver: asks on stdout, reads one line from stdin.
#[derive(Debug, Default)]
pub struct Prompt;

impl NameResolver for Prompt {
    fn resolve(&mut self, raw: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "\"{raw}\"? ")?;
        stdout.flush()?;

        let mut reply = String::new();
        io::stdin().lock().read_line(&mut reply)?;

        Ok(reply.trim().to_string())
    }
}

/// First-use-wins cache around a [`NameResolver`].
pub struct Reconciler<R> {
    resolver: R,
    map: HashMap<String, String>,
}

impl<R: NameResolver> Reconciler<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            map: HashMap::new(),
        }
    }

    /// Returns the display name for `raw`, resolving it at most once per run.
    pub fn display_name(&mut self, raw: &str) -> io::Result<String> {
        if let Some(name) = self.map.get(raw) {
            return Ok(name.clone());
        }

        let reply = self.resolver.resolve(raw)?;
        let name = if reply.is_empty() { raw.to_string() } else { reply };

        self.map.insert(raw.to_string(), name.clone());
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out scripted replies; panics when asked more often than scripted.
    struct Scripted(Vec<&'static str>);

    impl NameResolver for Scripted {
        fn resolve(&mut self, _raw: &str) -> io::Result<String> {
            Ok(self.0.remove(0).to_string())
        }
    }

    #[test]
    fn first_resolution_wins() {
        let mut reconciler = Reconciler::new(Scripted(vec!["Systems"]));

        assert_eq!(reconciler.display_name("Intro to Systems").unwrap(), "Systems");
        // A second occurrence must not consume another scripted reply.
        assert_eq!(reconciler.display_name("Intro to Systems").unwrap(), "Systems");
    }

    #[test]
    fn empty_reply_keeps_the_raw_name() {
        let mut reconciler = Reconciler::new(Scripted(vec![""]));
        assert_eq!(reconciler.display_name("Calculus II").unwrap(), "Calculus II");
    }

    #[test]
    fn distinct_raw_names_resolve_independently() {
        let mut reconciler = Reconciler::new(Scripted(vec!["A", "B"]));
        assert_eq!(reconciler.display_name("first").unwrap(), "A");
        assert_eq!(reconciler.display_name("second").unwrap(), "B");
        assert_eq!(reconciler.display_name("first").unwrap(), "A");
    }
}
