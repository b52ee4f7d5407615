use std::fmt;

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::config::LoggerConfig;
use crate::level::Level;
use crate::record::{Location, Record};
use crate::sink::{Sink, StdoutSink};

/// Configuration plus a lock-protected output sink.
///
/// Every [`Record`] created from a core samples the core's configuration once
/// and, if it was active, writes itself through the core's output lock when
/// dropped. The lock is held for exactly one line, so lines from concurrent
/// records never interleave while building a record never blocks another
/// thread.
///
/// The process-wide instance is returned by [`global`]; separate instances
/// are useful for embedding and testing.
///
/// # Examples
///
/// ```
/// use logger_lite::{LoggerCore, MemorySink};
/// use logger_lite::level::defaults::INFO;
///
/// let sink = MemorySink::new();
/// let core = LoggerCore::new(sink.clone());
/// core.config().set_coloring(false);
///
/// core.create_record(&INFO, None).append("Hello").append(5);
///
/// assert_eq!(sink.contents(), "[INFO] Hello5\n");
/// ```
pub struct LoggerCore {
    config: LoggerConfig,
    output: Mutex<Box<dyn Sink>>,
}

impl LoggerCore {
    /// Creates a core with default configuration writing to `sink`.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            config: LoggerConfig::new(),
            output: Mutex::new(Box::new(sink)),
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Replaces the output sink, returning the previous one.
    ///
    /// Waits for an in-progress line to finish.
    pub fn set_sink(&self, sink: impl Sink + 'static) -> Box<dyn Sink> {
        std::mem::replace(&mut *self.output.lock(), Box::new(sink))
    }

    /// Starts a record at `level`, optionally tagged with a source location.
    ///
    /// Whether the record will produce output is decided here, from the
    /// configuration at this instant.
    #[inline]
    pub fn create_record<'a>(&'a self, level: &Level, location: Option<Location<'a>>) -> Record<'a> {
        Record::new(self, level, location)
    }

    /// Writes a finished record as one line under the output lock.
    pub(crate) fn emit(&self, record: &Record<'_>) {
        let mut output = self.output.lock();
        // A failing sink must not fail the caller.
        let _ = record.write_to(&mut **output);
    }
}

impl fmt::Debug for LoggerCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerCore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

lazy_static! {
    /// The process-wide core, writing to stdout.
    ///
    /// Initialized on first use; initialization also asks the console to
    /// interpret ANSI color sequences where that takes an explicit opt-in.
    static ref GLOBAL_CORE: LoggerCore = {
        enable_console_colors();
        LoggerCore::new(StdoutSink)
    };
}

/// Returns the process-wide core.
#[inline]
pub fn global() -> &'static LoggerCore {
    &GLOBAL_CORE
}

/// Initializes the process-wide core now instead of on first use.
///
/// Calling this more than once is harmless.
pub fn init() {
    lazy_static::initialize(&GLOBAL_CORE);
}

/// Replaces the process-wide output sink, returning the previous one.
pub fn set_sink(sink: impl Sink + 'static) -> Box<dyn Sink> {
    global().set_sink(sink)
}

/// Starts a record on the process-wide core.
///
/// # Examples
///
/// ```
/// use logger_lite::{create_record, Location};
/// use logger_lite::level::defaults::WARNING;
///
/// create_record(&WARNING, Some(Location::new(file!(), line!())))
///     .append("disk usage at ")
///     .append(93)
///     .append('%');
/// ```
#[inline]
pub fn create_record<'a>(level: &Level, location: Option<Location<'a>>) -> Record<'a> {
    global().create_record(level, location)
}

#[cfg(windows)]
fn enable_console_colors() {
    // Older consoles reject virtual terminal mode; output then stays uncolored.
    let _ = colored::control::set_virtual_terminal(true);
}

#[cfg(not(windows))]
fn enable_console_colors() {}
