//! Console destination implementation

use crate::core::Destination;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Standard output or standard error. Never closable: the process owns the
/// console streams, not the logger.
#[derive(Debug)]
pub struct ConsoleDestination {
    stream: Stream,
}

impl ConsoleDestination {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Write for ConsoleDestination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write(buf),
            Stream::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(buf),
            Stream::Stderr => io::stderr().lock().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }
}

impl Destination for ConsoleDestination {
    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_names_and_not_closable() {
        let out = ConsoleDestination::stdout();
        let err = ConsoleDestination::stderr();
        assert_eq!(out.name(), "stdout");
        assert_eq!(err.name(), "stderr");
        assert!(!out.is_closable());
        assert!(!err.is_closable());
    }
}
