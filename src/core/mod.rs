//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod destination;
pub mod error;
pub mod log_flags;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod options;
pub mod sink;

pub use caller::SourceLocation;
pub use config::LoggerConfig;
pub use destination::Destination;
pub use error::{LoggerError, Result};
pub use log_flags::LogFlags;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use message::concat;
pub use options::{
    with_error_log_file, with_info_log_file, with_level, with_log_flags, LogOption, Options,
};
pub use sink::{Group, Sink};
