//! The target scanner
//!
//!     A single forward pass over the lines of a Makefile. The scanner is always in
//!     one of two states:
//!
//!     - Seeking: looking for a target declaration. Every other line is discarded.
//!     - Accumulating: a declaration was just seen and consecutive comment lines are
//!       appended to its documentation.
//!
//!     The first non-comment line while accumulating closes the pending target. That
//!     line is not scanned again, so a declaration written directly under another
//!     target's comment block is skipped:
//!
//!     ```text
//!     build:
//!     # Builds everything
//!     clean:              <- closes `build`, not recognised as a declaration
//!     # Never collected
//!     ```
//!
//!     A blank line between the blocks avoids this.
//!
//! Prerequisites
//!
//!     The text after the colon is split on single spaces. The split only counts when
//!     it produces more than one raw token, so `clean: build` lists `build` (the
//!     leading space yields an empty first token) while `clean:build` lists nothing.

use crate::target::Target;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// `name:` at column 0, everything after the colon captured raw.
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>[A-Za-z0-9_-]+):(?P<prereqs>.*)").unwrap());

/// Optional ASCII indentation, one `#`, then the documentation text verbatim.
/// Unicode spaces and `\v` do not count as indentation.
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t\n\f\r ]*#(?P<text>.*)$").unwrap());

#[derive(Debug, Default)]
enum ScannerState {
    #[default]
    Seeking,
    Accumulating(Target),
}

/// Incremental form of [`extract`], fed one line at a time.
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScannerState,
    targets: Vec<Target>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) {
        self.state = match std::mem::take(&mut self.state) {
            ScannerState::Seeking => match parse_declaration(line) {
                Some(target) => {
                    trace!(target_name = %target.name, "declaration found");
                    ScannerState::Accumulating(target)
                }
                None => ScannerState::Seeking,
            },
            ScannerState::Accumulating(mut target) => match comment_text(line) {
                Some(text) => {
                    target.push_doc_line(text);
                    ScannerState::Accumulating(target)
                }
                None => {
                    self.finalize(target);
                    ScannerState::Seeking
                }
            },
        };
    }

    /// Close any pending target and return everything collected so far.
    pub fn finish(mut self) -> Vec<Target> {
        if let ScannerState::Accumulating(target) = std::mem::take(&mut self.state) {
            self.finalize(target);
        }
        self.targets
    }

    fn finalize(&mut self, target: Target) {
        if target.is_documented() {
            debug!(
                target_name = %target.name,
                prerequisites = target.prerequisites.len(),
                "documented target"
            );
            self.targets.push(target);
        } else {
            trace!(target_name = %target.name, "skipping undocumented target");
        }
    }
}

/// Scan `lines` and return the documented targets in encounter order.
pub fn extract<I, S>(lines: I) -> Vec<Target>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new();
    for line in lines {
        scanner.feed(line.as_ref());
    }
    scanner.finish()
}

/// Scan a whole Makefile held in memory. Accepts `\n` and `\r\n` line endings.
pub fn extract_str(source: &str) -> Vec<Target> {
    extract(source.lines())
}

/// Match a declaration line, returning a fresh undocumented target.
pub fn parse_declaration(line: &str) -> Option<Target> {
    let caps = DECLARATION.captures(line)?;
    let raw = caps.name("prereqs").map_or("", |m| m.as_str());
    Some(Target::new(&caps["name"]).with_prerequisites(split_prerequisites(raw)))
}

/// Match a comment line, returning the text after the `#`.
pub fn comment_text(line: &str) -> Option<&str> {
    COMMENT
        .captures(line)
        .and_then(|caps| caps.name("text"))
        .map(|m| m.as_str())
}

fn split_prerequisites(raw: &str) -> Vec<String> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    if tokens.len() <= 1 {
        return Vec::new();
    }
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
