//! # Leveled Logger
//!
//! A small leveled logging library: messages are classified by severity,
//! filtered against a minimum level, and written to one or more destinations
//! with a timestamp and the caller's source location.
//!
//! ## Features
//!
//! - **Severity routing**: Debug and Info go to stdout, Warn, Error and Fatal
//!   to stderr, each optionally mirrored to a file
//! - **Thread Safe**: every line is written under one lock, never torn
//! - **Caller location**: `file:line` of the real call site, with an extra
//!   depth for logging helpers
//! - **Fatal path**: `fatal` writes, closes every destination and exits

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        concat, with_error_log_file, with_info_log_file, with_level, with_log_flags,
        Destination, LogFlags, LogLevel, LogOption, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, Options, Result, SourceLocation,
    };
    pub use crate::destinations::{ConsoleDestination, FileDestination, MemoryDestination};
}

pub use crate::core::{
    concat, with_error_log_file, with_info_log_file, with_level, with_log_flags, Destination,
    LogFlags, LogLevel, LogOption, Logger, LoggerBuilder, LoggerConfig, LoggerError, Options,
    Result, SourceLocation,
};
pub use crate::destinations::{ConsoleDestination, FileDestination, MemoryDestination, WriterGroup};
