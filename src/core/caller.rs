//! Caller location capture
//!
//! The direct caller of a logging entry point is known for free through
//! `#[track_caller]`. When a logging call is wrapped by helper functions that
//! are not themselves `#[track_caller]`, the caller can ask for an extra
//! depth; the stack is then walked outward from the logger's own frames.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// File and line a log line is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    file: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Placeholder used when no location could be determined.
    pub fn unknown() -> Self {
        Self::new("???", 0)
    }

    /// Location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Final path element of `file`.
    pub fn short_file(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file)
    }

    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Resolve the frame `depth` levels above the direct caller of the
/// outermost frame whose symbol contains `entry_marker`.
///
/// Depth 0 is the function that called the entry point. Returns `None` when
/// the stack is shallower than `depth`, or when the entry frame or the
/// requested frame cannot be symbolized (builds without line tables).
pub(crate) fn resolve(entry_marker: &str, depth: usize) -> Option<SourceLocation> {
    let mut symbols: Vec<(Option<String>, Option<SourceLocation>)> = Vec::new();

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            let name = symbol.name().map(|n| n.to_string());
            let location = match (symbol.filename(), symbol.lineno()) {
                (Some(path), Some(line)) => Some(SourceLocation::new(
                    path.to_string_lossy().into_owned(),
                    line,
                )),
                _ => None,
            };
            symbols.push((name, location));
        });
        true
    });

    let entry = symbols.iter().rposition(|(name, _)| {
        name.as_deref()
            .is_some_and(|name| name.contains(entry_marker))
    })?;

    let target = entry.checked_add(1)?.checked_add(depth)?;
    symbols
        .into_iter()
        .nth(target)
        .and_then(|(_, location)| location)
}
