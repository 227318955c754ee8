//! Destination implementations and fan-out

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleDestination;
pub use file::FileDestination;
pub use memory::MemoryDestination;

// Re-export trait for convenience
pub use crate::core::Destination;

/// Fan-out over every destination of one severity group.
#[derive(Default)]
pub struct WriterGroup {
    destinations: Vec<Box<dyn Destination>>,
}

impl WriterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, destination: Box<dyn Destination>) -> usize {
        self.destinations.push(destination);
        self.destinations.len() - 1
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Destination>> {
        self.destinations.get_mut(index)
    }

    pub fn names(&self) -> Vec<&str> {
        self.destinations.iter().map(|d| d.name()).collect()
    }

    /// Write `bytes` to every destination and flush it.
    ///
    /// Individual failures are ignored; one failing destination never keeps
    /// the others from receiving the line.
    pub fn write_all(&mut self, bytes: &[u8]) {
        for destination in self.destinations.iter_mut() {
            let _ = destination.write_all(bytes);
            let _ = destination.flush();
        }
    }

    pub fn flush(&mut self) {
        for destination in self.destinations.iter_mut() {
            let _ = destination.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};

    struct BrokenDestination;

    impl Write for BrokenDestination {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("broken pipe"))
        }
    }

    impl Destination for BrokenDestination {
        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_fan_out_reaches_every_destination() {
        let first = MemoryDestination::new();
        let second = MemoryDestination::new();

        let mut group = WriterGroup::new();
        group.push(Box::new(first.clone()));
        group.push(Box::new(second.clone()));
        group.write_all(b"line\n");

        assert_eq!(first.contents(), "line\n");
        assert_eq!(second.contents(), "line\n");
    }

    #[test]
    fn test_failing_destination_does_not_block_others() {
        let healthy = MemoryDestination::new();

        let mut group = WriterGroup::new();
        group.push(Box::new(BrokenDestination));
        group.push(Box::new(healthy.clone()));
        group.write_all(b"still delivered\n");

        assert_eq!(healthy.contents(), "still delivered\n");
        assert_eq!(group.names(), vec!["broken", "memory"]);
    }
}
