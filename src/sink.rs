use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for finished log lines.
///
/// A sink receives one fully assembled record at a time and is responsible
/// for appending the trailing newline. The core serializes calls through its
/// output lock, so an implementation never sees two records at once and needs
/// no locking of its own.
///
/// # Usage
///
/// ```
/// use logger_lite::sink::Sink;
/// use std::fmt;
/// use std::io;
///
/// // Forward every line to stderr instead of stdout
/// struct StderrSink;
///
/// impl Sink for StderrSink {
///     fn write_line(&mut self, line: fmt::Arguments<'_>) -> io::Result<()> {
///         use std::io::Write;
///         let mut err = io::stderr().lock();
///         err.write_fmt(line)?;
///         err.write_all(b"\n")
///     }
/// }
/// ```
pub trait Sink: Send {
    /// Writes `line` followed by a newline.
    ///
    /// Errors are reported to the caller, which discards them: logging never
    /// fails the program.
    fn write_line(&mut self, line: fmt::Arguments<'_>) -> io::Result<()>;
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: fmt::Arguments<'_>) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_fmt(line)?;
        out.write_all(b"\n")
    }
}

/// Collects lines in memory.
///
/// Clones share the same storage, so a host can hand one clone to the logger
/// and inspect the output through another.
///
/// # Examples
///
/// ```
/// use logger_lite::sink::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// let mut writer = sink.clone();
/// writer.write_line(format_args!("[INFO] {}", "ready")).unwrap();
///
/// assert_eq!(sink.contents(), "[INFO] ready\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    data: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.data.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.data.lock()).into_owned()
    }

    /// Written lines without their trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.data.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: fmt::Arguments<'_>) -> io::Result<()> {
        let mut data = self.data.lock();
        data.write_fmt(line)?;
        data.push(b'\n');
        Ok(())
    }
}
