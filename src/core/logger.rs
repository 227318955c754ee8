//! Main logger implementation

use super::{
    caller::{self, SourceLocation},
    destination::Destination,
    error::{LoggerError, Result},
    log_flags::LogFlags,
    log_level::LogLevel,
    message,
    options::{LogOption, Options},
    sink::{Group, Sink},
};
use crate::destinations::{ConsoleDestination, WriterGroup};
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Symbol prefix shared by every frame of the logger's own write path.
const ENTRY_FRAME: &str = concat!(module_path!(), "::Logger");

#[derive(Debug, Clone, Copy)]
struct DestinationId {
    group: Group,
    index: usize,
}

/// Everything the lock protects.
struct Outputs {
    low: WriterGroup,
    high: WriterGroup,
    closers: Vec<DestinationId>,
}

impl Outputs {
    fn group_mut(&mut self, group: Group) -> &mut WriterGroup {
        match group {
            Group::Low => &mut self.low,
            Group::High => &mut self.high,
        }
    }

    fn group(&self, group: Group) -> &WriterGroup {
        match group {
            Group::Low => &self.low,
            Group::High => &self.high,
        }
    }
}

pub struct Logger {
    min_level: LogLevel,
    flags: LogFlags,
    /// Extra caller depth applied to every write
    depth: AtomicUsize,
    /// One sink per level, indexed by `LogLevel::index`
    sinks: [Sink; 5],
    outputs: Mutex<Outputs>,
}

impl Logger {
    /// Build a logger from a list of options applied in order to the defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::{with_level, LogLevel, Logger};
    ///
    /// let logger = Logger::new([with_level(LogLevel::Warn)]);
    /// logger.info("dropped");
    /// logger.warn("written to stderr");
    /// ```
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = LogOption>) -> Self {
        let mut opts = Options::default();
        for option in options {
            opts.apply(option);
        }
        Self::from_options(opts)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger from a fully assembled options record.
    #[must_use]
    pub fn from_options(options: Options) -> Self {
        Self::with_consoles(
            options,
            Box::new(ConsoleDestination::stdout()),
            Box::new(ConsoleDestination::stderr()),
        )
    }

    /// Same as `from_options` with the console streams swapped out.
    pub(crate) fn with_consoles(
        options: Options,
        low_console: Box<dyn Destination>,
        high_console: Box<dyn Destination>,
    ) -> Self {
        let mut outputs = Outputs {
            low: WriterGroup::new(),
            high: WriterGroup::new(),
            closers: Vec::new(),
        };
        outputs.low.push(low_console);
        outputs.high.push(high_console);

        let extras = [
            (Group::Low, options.info_log_file),
            (Group::High, options.error_log_file),
        ];
        for (group, destination) in extras {
            let Some(destination) = destination else {
                continue;
            };
            let closable = destination.is_closable();
            let index = outputs.group_mut(group).push(destination);
            if closable {
                outputs.closers.push(DestinationId { group, index });
            }
        }

        let flags = options.flags;
        Self {
            min_level: options.min_level,
            flags,
            depth: AtomicUsize::new(0),
            sinks: LogLevel::ALL.map(|level| Sink::new(level, flags)),
            outputs: Mutex::new(outputs),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn flags(&self) -> LogFlags {
        self.flags
    }

    /// Whether a write at `level` would produce output.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Extra caller depth added to every write of this logger.
    ///
    /// Useful when all logging goes through one helper layer: set it to the
    /// number of helper frames and plain `info` calls report the helpers'
    /// callers. Like the `*_depth` methods this needs line tables in the
    /// binary (`debug = "line-tables-only"` or more in the build profile);
    /// without them every line is attributed to `???:0`.
    pub fn set_depth(&self, depth: usize) {
        self.depth.store(depth, Ordering::Relaxed);
    }

    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }

    /// Names of the destinations lines of `level` are written to.
    pub fn destinations(&self, level: LogLevel) -> Vec<String> {
        let outputs = self.outputs.lock();
        outputs
            .group(Group::for_level(level))
            .names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// The single write path behind every public logging method.
    fn output<F>(
        &self,
        level: LogLevel,
        extra_depth: usize,
        call_site: &'static Location<'static>,
        render: F,
    ) where
        F: FnOnce() -> String,
    {
        if level < self.min_level {
            return;
        }

        let sink = &self.sinks[level.index()];
        let location = if sink.flags().wants_location() {
            Some(self.locate(extra_depth, call_site))
        } else {
            None
        };
        let message = render();

        let mut outputs = self.outputs.lock();
        let line = sink.render(sink.now(), location.as_ref(), &message);
        outputs.group_mut(sink.group()).write_all(line.as_bytes());
    }

    fn locate(&self, extra_depth: usize, call_site: &'static Location<'static>) -> SourceLocation {
        let depth = self.depth().saturating_add(extra_depth);
        if depth == 0 {
            return call_site.into();
        }
        // The call site is the wrapper here, never the frame that was asked for
        caller::resolve(ENTRY_FRAME, depth).unwrap_or_else(SourceLocation::unknown)
    }

    /// Release every closable destination and exit with status 1.
    fn exit(&self) -> ! {
        // Failures were already reported on stderr by close
        let _ = self.close();
        std::process::exit(1)
    }

    /// Release every owned closable destination.
    ///
    /// Each failure is reported on stderr and the remaining destinations are
    /// still released; the result aggregates all failures. Destinations
    /// released by an earlier call are not touched again.
    pub fn close(&self) -> Result<()> {
        let mut outputs = self.outputs.lock();
        let closers = std::mem::take(&mut outputs.closers);
        let total = closers.len();

        let mut errors = Vec::new();
        for id in closers {
            let Some(destination) = outputs.group_mut(id.group).get_mut(id.index) else {
                continue;
            };
            if let Err(e) = destination.close() {
                eprintln!("[LOGGER ERROR] Failed to close log {}: {}", destination.name(), e);
                errors.push((destination.name().to_string(), e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::close_failed(total, errors))
        }
    }

    pub fn flush(&self) {
        let mut outputs = self.outputs.lock();
        outputs.low.flush();
        outputs.high.flush();
    }

    // Generic entry points. These never exit, even at Fatal.

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.output(level, 0, Location::caller(), || message.to_string());
    }

    #[track_caller]
    pub fn logln(&self, level: LogLevel, message: impl Display) {
        self.output(level, 0, Location::caller(), || message::with_newline(message));
    }

    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.output(level, 0, Location::caller(), || message::from_args(args));
    }

    /// Log attributed to the frame `depth` levels above the direct caller.
    ///
    /// Frames are found by walking the stack, which needs line tables in the
    /// binary (`debug = "line-tables-only"` or more in the build profile).
    /// When the frame cannot be resolved, because the stack is shallower than
    /// `depth` or the binary carries no line tables, the line is attributed
    /// to `???:0`.
    #[track_caller]
    pub fn log_depth(&self, level: LogLevel, depth: usize, args: fmt::Arguments<'_>) {
        self.output(level, depth, Location::caller(), || message::from_args(args));
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.output(LogLevel::Debug, 0, Location::caller(), || message.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn debugln(&self, message: impl Display) {
        self.output(LogLevel::Debug, 0, Location::caller(), || {
            message::with_newline(message)
        });
    }

    #[inline]
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Debug, 0, Location::caller(), || message::from_args(args));
    }

    /// See [`Logger::log_depth`] for how `depth` is resolved.
    #[track_caller]
    pub fn debug_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Debug, depth, Location::caller(), || {
            message::from_args(args)
        });
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.output(LogLevel::Info, 0, Location::caller(), || message.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn infoln(&self, message: impl Display) {
        self.output(LogLevel::Info, 0, Location::caller(), || {
            message::with_newline(message)
        });
    }

    #[inline]
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Info, 0, Location::caller(), || message::from_args(args));
    }

    /// See [`Logger::log_depth`] for how `depth` is resolved.
    #[track_caller]
    pub fn info_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Info, depth, Location::caller(), || {
            message::from_args(args)
        });
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.output(LogLevel::Warn, 0, Location::caller(), || message.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn warnln(&self, message: impl Display) {
        self.output(LogLevel::Warn, 0, Location::caller(), || {
            message::with_newline(message)
        });
    }

    #[inline]
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Warn, 0, Location::caller(), || message::from_args(args));
    }

    /// See [`Logger::log_depth`] for how `depth` is resolved.
    #[track_caller]
    pub fn warn_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Warn, depth, Location::caller(), || {
            message::from_args(args)
        });
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.output(LogLevel::Error, 0, Location::caller(), || message.to_string());
    }

    #[inline]
    #[track_caller]
    pub fn errorln(&self, message: impl Display) {
        self.output(LogLevel::Error, 0, Location::caller(), || {
            message::with_newline(message)
        });
    }

    #[inline]
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Error, 0, Location::caller(), || message::from_args(args));
    }

    /// See [`Logger::log_depth`] for how `depth` is resolved.
    #[track_caller]
    pub fn error_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.output(LogLevel::Error, depth, Location::caller(), || {
            message::from_args(args)
        });
    }

    /// Log at Fatal, close every destination, and exit the process with status 1.
    ///
    /// Nothing after this call runs, including destructors. Do not use it
    /// where the caller has its own shutdown ordering to honor.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        self.output(LogLevel::Fatal, 0, Location::caller(), || message.to_string());
        self.exit()
    }

    #[track_caller]
    pub fn fatalln(&self, message: impl Display) -> ! {
        self.output(LogLevel::Fatal, 0, Location::caller(), || {
            message::with_newline(message)
        });
        self.exit()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.output(LogLevel::Fatal, 0, Location::caller(), || message::from_args(args));
        self.exit()
    }

    /// See [`Logger::log_depth`] for how `depth` is resolved.
    #[track_caller]
    pub fn fatal_depth(&self, depth: usize, args: fmt::Arguments<'_>) -> ! {
        self.output(LogLevel::Fatal, depth, Location::caller(), || {
            message::from_args(args)
        });
        self.exit()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_options(Options::default())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("flags", &self.flags)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Each method records an option; options are applied in call order when
/// `build` runs, so a later call overrides an earlier one.
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let capture = MemoryDestination::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .flags(LogFlags::SHORT_FILE)
///     .error_log_file(capture.clone())
///     .build();
///
/// logger.error("disk full");
/// assert!(capture.contents().starts_with("ERROR: "));
/// ```
pub struct LoggerBuilder {
    options: Options,
}

impl LoggerBuilder {
    /// Start from the defaults: minimum level Debug, default flags, no files.
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Start from the defaults with an explicit default minimum level.
    pub fn with_default_level(level: LogLevel) -> Self {
        Self {
            options: Options::with_default_level(level),
        }
    }

    /// Apply an arbitrary option.
    #[must_use]
    pub fn option(mut self, option: LogOption) -> Self {
        self.options.apply(option);
        self
    }

    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.options.min_level = level;
        self
    }

    /// Additional destination for Debug and Info lines.
    #[must_use]
    pub fn info_log_file<D: Destination + 'static>(mut self, destination: D) -> Self {
        self.options.info_log_file = Some(Box::new(destination));
        self
    }

    /// Additional destination for Warn, Error and Fatal lines.
    #[must_use]
    pub fn error_log_file<D: Destination + 'static>(mut self, destination: D) -> Self {
        self.options.error_log_file = Some(Box::new(destination));
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: LogFlags) -> Self {
        self.options.flags = flags;
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_options(self.options)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
