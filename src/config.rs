use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::logger_core::global;

/// Runtime switches that gate and color console output.
///
/// Each field is its own relaxed atomic. Readers get no consistency across
/// fields: a record may observe `enabled == true` next to a stale
/// `min_priority`. Every [`Record`](crate::Record) samples these once, at
/// creation.
///
/// # Thread Safety
///
/// All accessors take `&self` and may be called from any thread at any time.
#[derive(Debug)]
pub struct LoggerConfig {
    enabled: AtomicBool,
    colored: AtomicBool,
    min_priority: AtomicI32,
}

impl LoggerConfig {
    /// Logging enabled, colored, and every priority passes.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            colored: AtomicBool::new(true),
            min_priority: AtomicI32::new(0),
        }
    }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn set_enabled(&self, value: bool) {
        self.enabled.store(value, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn is_coloring(&self) -> bool {
        self.colored.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn set_coloring(&self, value: bool) {
        self.colored.store(value, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn min_priority(&self) -> i32 {
        self.min_priority.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn set_min_priority(&self, value: i32) {
        self.min_priority.store(value, Ordering::Relaxed);
    }

    /// Whether a record at `priority` created right now would be written.
    #[inline(always)]
    pub fn allows(&self, priority: i32) -> bool {
        self.is_enabled() && priority >= self.min_priority()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns whether the process-wide logger is enabled.
pub fn is_enabled() -> bool {
    global().config().is_enabled()
}

/// Turns the process-wide logger on or off.
///
/// Records already created keep the decision they made at creation.
///
/// # Examples
///
/// ```
/// logger_lite::set_enabled(false);
/// assert!(!logger_lite::is_enabled());
/// logger_lite::set_enabled(true);
/// ```
pub fn set_enabled(value: bool) {
    global().config().set_enabled(value);
}

/// Returns whether emitted lines carry ANSI color sequences.
pub fn is_coloring() -> bool {
    global().config().is_coloring()
}

pub fn set_coloring(value: bool) {
    global().config().set_coloring(value);
}

/// Returns the minimum priority a level needs to be written.
pub fn min_priority() -> i32 {
    global().config().min_priority()
}

/// Sets the minimum priority a level needs to be written.
///
/// # Examples
///
/// ```
/// use logger_lite::level::defaults::{INFO, WARNING};
///
/// logger_lite::set_min_priority(WARNING.priority());
/// assert!(!logger_lite::create_record(&INFO, None).is_active());
/// logger_lite::set_min_priority(0);
/// ```
pub fn set_min_priority(value: i32) {
    global().config().set_min_priority(value);
}
