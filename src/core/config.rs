//! Logger configuration from text
//!
//! `LoggerConfig` describes a logger in a serializable form so it can be kept
//! in a configuration file:
//!
//! ```json
//! {
//!     "level": "warn",
//!     "info_log_file": "/var/log/app/info.log",
//!     "error_log_file": "/var/log/app/error.log",
//!     "flags": "date|microseconds|shortfile"
//! }
//! ```
//!
//! Every key is optional; missing keys keep the logger defaults.

use super::{
    error::{LoggerError, Result},
    log_flags::LogFlags,
    log_level::LogLevel,
    logger::Logger,
    options::{self, LogOption, Options},
};
use crate::destinations::FileDestination;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_log_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_log_file: Option<PathBuf>,
    /// `|`-separated flag names; `None` keeps the default flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl LoggerConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config("config file", format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parsed flags, or the defaults when none are configured.
    pub fn log_flags(&self) -> Result<LogFlags> {
        match &self.flags {
            Some(text) => text.parse(),
            None => Ok(LogFlags::default()),
        }
    }

    /// Open the configured files and turn the description into options.
    pub fn into_options(self) -> Result<Vec<LogOption>> {
        let mut opts = vec![
            options::with_level(self.level),
            options::with_log_flags(self.log_flags()?),
        ];
        if let Some(path) = self.info_log_file {
            opts.push(options::with_info_log_file(FileDestination::new(path)?));
        }
        if let Some(path) = self.error_log_file {
            opts.push(options::with_error_log_file(FileDestination::new(path)?));
        }
        Ok(opts)
    }

    pub fn build(self) -> Result<Logger> {
        let mut opts = Options::default();
        for option in self.into_options()? {
            opts.apply(option);
        }
        Ok(Logger::from_options(opts))
    }
}
