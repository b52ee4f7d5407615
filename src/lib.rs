//! # Logger Lite
//!
//! A small, allocation-conscious console logger:
//!
//! * **Bounded records**: every message is built in a fixed 256-byte buffer
//!   and truncated with a visible `[TRUNCATED]` marker instead of growing
//! * **Cheap suppression**: a record decides once, at creation, whether it
//!   will be written; appends to a suppressed record are a single branch
//! * **Unbroken lines**: each record is written under one process-wide lock,
//!   so lines from concurrent threads never interleave
//! * **24-bit color**: levels carry an RGB color emitted as an ANSI escape
//!
//! ## Main Components
//!
//! * `level`: `Level` descriptors and the built-in defaults
//! * `config`: process-wide enabled / coloring / minimum-priority switches
//! * `message_buffer`: the fixed-capacity, truncating message buffer
//! * `loggable`: type-directed formatting of appended values
//! * `record`: a log statement in progress, written when dropped
//! * `logger_core`: configuration plus the locked output sink
//! * `log_bridge`: adapter for the `log` facade
//!
//! ## Quick Start
//!
//! ```
//! use logger_lite::{log_located, log_record, Level, Rgb};
//! use logger_lite::level::defaults::{INFO, WARNING};
//!
//! log_record!(INFO, "Hello, world!");
//! log_located!(WARNING, "retrying in ", 2.5, " s");
//!
//! // Levels are plain values; make your own
//! const VERBOSE: Level = Level::new("VERBOSE", Rgb::new(255, 255, 255), 5);
//! log_record!(VERBOSE, "cache hit ratio ", 0.97);
//!
//! // Only WARNING and above from here on
//! logger_lite::set_min_priority(WARNING.priority());
//! log_record!(INFO, "suppressed");
//! ```

pub mod config;
pub mod level;
pub mod log_bridge;
pub mod loggable;
pub mod logger_core;
pub mod message_buffer;
pub mod record;
pub mod sink;

pub use config::{is_coloring, is_enabled, min_priority, set_coloring, set_enabled, set_min_priority, LoggerConfig};
pub use level::{Level, Rgb};
pub use loggable::{opaque, Loggable, Opaque};
pub use logger_core::{create_record, global, init, set_sink, LoggerCore};
pub use message_buffer::{MessageBuffer, MESSAGE_CAPACITY, TRUNCATION_MARKER};
pub use record::{Location, Record};
pub use sink::{MemorySink, Sink, StdoutSink};

#[cfg(feature = "default-levels")]
pub use level::defaults::{DEBUG, ERROR, FATAL, INFO, WARNING};
