//! Destination trait for log output targets

use std::io::{self, Write};

/// A byte stream that rendered log lines are written to.
///
/// Destinations that own a releasable resource (a file handle, a socket)
/// report `is_closable` and implement `close`; the logger records them at
/// construction and releases them in `Logger::close`.
///
/// A destination must never log through the logger that writes to it: the
/// write runs inside the logger's critical section and would deadlock.
pub trait Destination: Write + Send {
    fn name(&self) -> &str;

    fn is_closable(&self) -> bool {
        false
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<D: Destination + ?Sized> Destination for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_closable(&self) -> bool {
        (**self).is_closable()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
