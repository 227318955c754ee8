//! Logger construction options
//!
//! An `Options` record starts from defaults and is mutated by a sequence of
//! `LogOption`s, applied in order. Scalar fields are last-writer-wins.

use super::{destination::Destination, log_flags::LogFlags, log_level::LogLevel};
use std::fmt;

/// Snapshot of everything a `Logger` is built from.
#[derive(Default)]
pub struct Options {
    pub min_level: LogLevel,
    /// Extra destination for Debug and Info lines, next to stdout
    pub info_log_file: Option<Box<dyn Destination>>,
    /// Extra destination for Warn, Error and Fatal lines, next to stderr
    pub error_log_file: Option<Box<dyn Destination>>,
    pub flags: LogFlags,
}

impl Options {
    /// Defaults with an explicit minimum level.
    pub fn with_default_level(min_level: LogLevel) -> Self {
        Self {
            min_level,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, option: LogOption) {
        (option.0)(self);
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("min_level", &self.min_level)
            .field("info_log_file", &self.info_log_file.as_ref().map(|d| d.name()))
            .field("error_log_file", &self.error_log_file.as_ref().map(|d| d.name()))
            .field("flags", &self.flags)
            .finish()
    }
}

/// A function that mutates an `Options` record.
pub struct LogOption(Box<dyn FnOnce(&mut Options) + Send>);

impl LogOption {
    /// Wrap an arbitrary mutation of the options record.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut Options) + Send + 'static,
    {
        LogOption(Box::new(f))
    }
}

pub fn with_level(level: LogLevel) -> LogOption {
    LogOption::new(move |o| o.min_level = level)
}

pub fn with_info_log_file<D: Destination + 'static>(destination: D) -> LogOption {
    LogOption::new(move |o| o.info_log_file = Some(Box::new(destination)))
}

pub fn with_error_log_file<D: Destination + 'static>(destination: D) -> LogOption {
    LogOption::new(move |o| o.error_log_file = Some(Box::new(destination)))
}

pub fn with_log_flags(flags: LogFlags) -> LogOption {
    LogOption::new(move |o| o.flags = flags)
}
