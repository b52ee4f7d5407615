//! Level descriptors for console logging.
//!
//! A [`Level`] is a plain value: a display name, a color used when coloring
//! is enabled, and a numeric priority compared against the configured
//! threshold. Nothing registers levels anywhere, so callers are free to build
//! their own next to the provided [`defaults`].

/// A 24-bit color, emitted as an ANSI true-color escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An immutable logging level.
///
/// Levels are only ever compared by `priority`; two levels may share a name
/// or a priority without conflict.
///
/// # Examples
///
/// ```
/// use logger_lite::level::{Level, Rgb};
///
/// const VERBOSE: Level = Level::new("VERBOSE", Rgb::new(255, 255, 255), 5);
/// assert_eq!(VERBOSE.name(), "VERBOSE");
/// assert_eq!(VERBOSE.priority(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level {
    name: &'static str,
    color: Rgb,
    priority: i32,
}

impl Level {
    pub const fn new(name: &'static str, color: Rgb, priority: i32) -> Self {
        Self { name, color, priority }
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    #[inline(always)]
    pub const fn priority(&self) -> i32 {
        self.priority
    }
}

/// Built-in levels.
///
/// These are always available here; with the `default-levels` feature they
/// are also re-exported from the crate root.
pub mod defaults {
    use super::{Level, Rgb};

    /// Only used by the `log` facade bridge for `log::Level::Trace`.
    pub const TRACE: Level = Level::new("TRACE", Rgb::new(150, 150, 150), 10);
    pub const DEBUG: Level = Level::new("DEBUG", Rgb::new(0, 200, 0), 20);
    pub const INFO: Level = Level::new("INFO", Rgb::new(0, 120, 255), 30);
    pub const WARNING: Level = Level::new("WARNING", Rgb::new(255, 215, 0), 40);
    pub const ERROR: Level = Level::new("ERROR", Rgb::new(220, 20, 60), 50);
    pub const FATAL: Level = Level::new("FATAL", Rgb::new(255, 0, 0), 60);
}

#[cfg(test)]
mod tests {
    use super::defaults::*;
    use super::*;

    #[test]
    fn test_default_priorities_are_ordered() {
        let levels = [TRACE, DEBUG, INFO, WARNING, ERROR, FATAL];
        for pair in levels.windows(2) {
            assert!(pair[0].priority() < pair[1].priority(), "{} should rank below {}", pair[0].name(), pair[1].name());
        }
    }

    #[test]
    fn test_levels_may_share_name_and_priority() {
        let a = Level::new("CUSTOM", Rgb::new(1, 2, 3), 30);
        let b = Level::new("CUSTOM", Rgb::new(4, 5, 6), 30);
        assert_eq!(a.priority(), b.priority());
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
    }
}
