//! Per-severity formatting sink
//!
//! A `Sink` renders one complete log line for its level. It knows which
//! writer group the line belongs to but never touches the destinations
//! itself; the logger writes the rendered bytes under its lock.

use super::{caller::SourceLocation, log_flags::LogFlags, log_level::LogLevel};
use chrono::{Local, NaiveDateTime, Utc};
use std::fmt::Write;

/// Which writer group a sink's lines are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Debug and Info: stdout plus the info log file
    Low,
    /// Warn, Error and Fatal: stderr plus the error log file
    High,
}

impl Group {
    pub fn for_level(level: LogLevel) -> Self {
        if level.is_high() {
            Group::High
        } else {
            Group::Low
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sink {
    level: LogLevel,
    flags: LogFlags,
    group: Group,
}

impl Sink {
    pub fn new(level: LogLevel, flags: LogFlags) -> Self {
        Self {
            level,
            flags,
            group: Group::for_level(level),
        }
    }

    pub fn flags(&self) -> LogFlags {
        self.flags
    }

    pub fn group(&self) -> Group {
        self.group
    }

    /// Current time in the zone selected by the flags.
    pub fn now(&self) -> NaiveDateTime {
        if self.flags.contains(LogFlags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }

    /// Render a full line, terminated by exactly one newline.
    pub fn render(
        &self,
        timestamp: NaiveDateTime,
        location: Option<&SourceLocation>,
        message: &str,
    ) -> String {
        render_line(self.level.tag(), self.flags, timestamp, location, message)
    }
}

/// `<tag><date> <time> <file>:<line>: <message>\n`, fields selected by `flags`.
pub fn render_line(
    tag: &str,
    flags: LogFlags,
    timestamp: NaiveDateTime,
    location: Option<&SourceLocation>,
    message: &str,
) -> String {
    let mut line = String::with_capacity(tag.len() + message.len() + 48);

    if !flags.contains(LogFlags::MSG_PREFIX) {
        line.push_str(tag);
    }

    if flags.contains(LogFlags::DATE) {
        let _ = write!(line, "{} ", timestamp.format("%Y/%m/%d"));
    }
    if flags.wants_time() {
        let _ = write!(line, "{}", timestamp.format("%H:%M:%S"));
        if flags.contains(LogFlags::MICROSECONDS) {
            let _ = write!(line, "{}", timestamp.format("%.6f"));
        }
        line.push(' ');
    }

    if flags.wants_location() {
        let unknown = SourceLocation::unknown();
        let location = location.unwrap_or(&unknown);
        let file = if flags.contains(LogFlags::SHORT_FILE) {
            location.short_file()
        } else {
            location.file()
        };
        let _ = write!(line, "{}:{}: ", file, location.line());
    }

    if flags.contains(LogFlags::MSG_PREFIX) {
        line.push_str(tag);
    }

    line.push_str(message);
    if !message.ends_with('\n') {
        line.push('\n');
    }
    line
}
