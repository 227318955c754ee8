//! Line header formatting flags
//!
//! `LogFlags` selects which header fields precede every message: the date,
//! the time (optionally with microseconds), and the source location.

use super::error::LoggerError;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogFlags(u32);

impl LogFlags {
    /// No header at all, only the tag and the message.
    pub const NONE: LogFlags = LogFlags(0);
    /// Local date: `2009/01/23`
    pub const DATE: LogFlags = LogFlags(1);
    /// Local time: `01:23:23`
    pub const TIME: LogFlags = LogFlags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: LogFlags = LogFlags(1 << 2);
    /// Full file path and line number: `/a/b/c/main.rs:23`
    pub const LONG_FILE: LogFlags = LogFlags(1 << 3);
    /// Final file name element and line number: `main.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: LogFlags = LogFlags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: LogFlags = LogFlags(1 << 5);
    /// Move the level tag from the beginning of the line to before the message
    pub const MSG_PREFIX: LogFlags = LogFlags(1 << 6);

    pub const STD: LogFlags = LogFlags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, LogFlags); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("longfile", Self::LONG_FILE),
        ("shortfile", Self::SHORT_FILE),
        ("utc", Self::UTC),
        ("msgprefix", Self::MSG_PREFIX),
    ];

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: LogFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(&self, other: LogFlags) -> bool {
        self.0 & other.0 != 0
    }

    pub(crate) fn wants_time(&self) -> bool {
        self.intersects(LogFlags::TIME | LogFlags::MICROSECONDS)
    }

    pub(crate) fn wants_location(&self) -> bool {
        self.intersects(LogFlags::SHORT_FILE | LogFlags::LONG_FILE)
    }
}

impl Default for LogFlags {
    fn default() -> Self {
        LogFlags::DATE | LogFlags::MICROSECONDS | LogFlags::SHORT_FILE
    }
}

impl BitOr for LogFlags {
    type Output = LogFlags;

    fn bitor(self, rhs: LogFlags) -> LogFlags {
        LogFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogFlags {
    fn bitor_assign(&mut self, rhs: LogFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LogFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        write!(f, "{}", names.join("|"))
    }
}

/// Parses `"date|microseconds|shortfile"`; an empty string means no flags.
impl FromStr for LogFlags {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = LogFlags::NONE;
        for part in s.split(['|', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            let lower = part.to_ascii_lowercase();
            let flag = match lower.as_str() {
                "std" => LogFlags::STD,
                "none" => LogFlags::NONE,
                name => Self::NAMED
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, flag)| *flag)
                    .ok_or_else(|| {
                        LoggerError::config("flags", format!("unknown flag '{}'", part))
                    })?,
            };
            flags |= flag;
        }
        Ok(flags)
    }
}
