//! File destination implementation

use crate::core::{Destination, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileDestination {
    path: PathBuf,
    name: String,
    writer: Option<BufWriter<File>>,
}

impl FileDestination {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_destination(path.display().to_string(), e))?;
        Ok(Self::from_file(file, path))
    }

    /// Wrap an already opened file; `path` is only used for naming.
    pub fn from_file(file: File, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
            writer: Some(BufWriter::new(file)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other(format!("log file '{}' is closed", self.name)))
    }
}

impl Write for FileDestination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Destination for FileDestination {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_closable(&self) -> bool {
        true
    }

    /// Flush buffered lines and release the handle. Closing twice fails.
    fn close(&mut self) -> io::Result<()> {
        let writer = self.writer.take().ok_or_else(|| {
            io::Error::other(format!("log file '{}' already closed", self.name))
        })?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}

impl Drop for FileDestination {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
