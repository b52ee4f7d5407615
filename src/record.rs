use std::fmt;
use std::io;

use crate::level::{Level, Rgb};
use crate::loggable::Loggable;
use crate::logger_core::LoggerCore;
use crate::message_buffer::MessageBuffer;
use crate::sink::Sink;

/// Source position attached to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Location<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The file name with any leading directories removed. Both `/` and `\`
    /// count as separators.
    pub fn basename(&self) -> &'a str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }
}

/// One log statement in progress.
///
/// A record is created by [`LoggerCore::create_record`] (or
/// [`create_record`](crate::create_record) for the process-wide core), filled
/// with [`append`](Record::append), and written when it is dropped, whichever
/// way the enclosing scope is left, unwinding included.
///
/// At creation the record decides once whether it is active: the logger must
/// be enabled and the level's priority must reach the minimum. It also
/// samples the coloring switch. Later configuration changes do not affect a
/// record already in flight. Appends to an inactive record cost one branch.
///
/// The output line is
/// `[color]` `[NAME] ` `[file.rs:LINE] ` message `[reset]` newline,
/// where the color escapes only appear with coloring on and the location only
/// when one was given.
///
/// # Examples
///
/// ```
/// use logger_lite::{LoggerCore, Location, MemorySink};
/// use logger_lite::level::defaults::ERROR;
///
/// let sink = MemorySink::new();
/// let core = LoggerCore::new(sink.clone());
/// core.config().set_coloring(false);
///
/// {
///     let mut record = core.create_record(&ERROR, Some(Location::new("src/net/peer.rs", 88)));
///     record.append("retries exhausted after ").append(3).append(" attempts");
/// }
///
/// assert_eq!(sink.contents(), "[ERROR] [peer.rs:88] retries exhausted after 3 attempts\n");
/// ```
#[must_use = "a record is written when dropped; binding it to `_` writes it immediately"]
pub struct Record<'a> {
    core: &'a LoggerCore,
    level: Level,
    location: Option<Location<'a>>,
    active: bool,
    colored: bool,
    buffer: MessageBuffer,
}

impl<'a> Record<'a> {
    pub(crate) fn new(core: &'a LoggerCore, level: &Level, location: Option<Location<'a>>) -> Self {
        let config = core.config();
        Self {
            core,
            level: *level,
            location,
            active: config.allows(level.priority()),
            colored: config.is_coloring(),
            buffer: MessageBuffer::new(),
        }
    }

    /// Appends a value's textual form to the message.
    ///
    /// Does nothing on an inactive record. Text beyond the buffer's capacity
    /// is replaced with the truncation marker.
    #[inline(always)]
    pub fn append(&mut self, value: impl Loggable) -> &mut Self {
        if self.active {
            value.append_to(&mut self.buffer);
        }
        self
    }

    /// Whether this record will be written.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this record will be written with color escapes.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn location(&self) -> Option<&Location<'a>> {
        self.location.as_ref()
    }

    /// The message accumulated so far.
    pub fn message(&self) -> &str {
        self.buffer.as_str()
    }

    /// Whether the message overflowed the buffer.
    pub fn is_truncated(&self) -> bool {
        self.buffer.is_truncated()
    }

    /// Hands the assembled line to `sink`. The caller holds the output lock.
    pub(crate) fn write_to<S: Sink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        let color = self.colored.then(|| self.level.color());
        sink.write_line(format_args!(
            "{}[{}] {}{}{}",
            ColorStart(color),
            self.level.name(),
            SourcePrefix(self.location.as_ref()),
            self.buffer.as_str(),
            ColorReset(color.is_some()),
        ))
    }
}

impl fmt::Write for Record<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.active {
            self.buffer.append(s);
        }
        Ok(())
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("location", &self.location)
            .field("active", &self.active)
            .field("colored", &self.colored)
            .field("message", &self.buffer.as_str())
            .finish()
    }
}

impl Drop for Record<'_> {
    fn drop(&mut self) {
        if self.active {
            self.core.emit(self);
        }
    }
}

struct ColorStart(Option<Rgb>);

impl fmt::Display for ColorStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Rgb { r, g, b }) => write!(f, "\x1b[38;2;{};{};{}m", r, g, b),
            None => Ok(()),
        }
    }
}

struct ColorReset(bool);

impl fmt::Display for ColorReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            f.write_str("\x1b[0m")
        } else {
            Ok(())
        }
    }
}

struct SourcePrefix<'a, 'b>(Option<&'b Location<'a>>);

impl fmt::Display for SourcePrefix<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(location) => write!(f, "[{}:{}] ", location.basename(), location.line()),
            None => Ok(()),
        }
    }
}

/// Logs values at a level on the process-wide core, without a source
/// location.
///
/// Arguments are only evaluated if the record is active.
///
/// # Examples
///
/// ```
/// use logger_lite::log_record;
/// use logger_lite::level::defaults::INFO;
///
/// let user = "maya";
/// log_record!(INFO, "user ", user, " logged in, session ", 42);
/// ```
#[macro_export]
macro_rules! log_record {
    ($level:expr $(, $value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut record = $crate::create_record(&$level, ::core::option::Option::None);
        if record.is_active() {
            $( record.append($value); )*
        }
    }};
}

/// Like [`log_record!`], tagging the record with the caller's file and line.
///
/// # Examples
///
/// ```
/// use logger_lite::log_located;
/// use logger_lite::level::defaults::WARNING;
///
/// log_located!(WARNING, "queue depth ", 1024, " exceeds soft limit");
/// ```
#[macro_export]
macro_rules! log_located {
    ($level:expr $(, $value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut record = $crate::create_record(
            &$level,
            ::core::option::Option::Some($crate::Location::new(file!(), line!())),
        );
        if record.is_active() {
            $( record.append($value); )*
        }
    }};
}
