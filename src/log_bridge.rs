use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, SetLoggerError};

use crate::level::defaults::{DEBUG, ERROR, INFO, TRACE, WARNING};
use crate::level::Level;
use crate::logger_core::{global, LoggerCore};
use crate::record::Location;

/// Routes the [`log`] facade into a [`LoggerCore`].
///
/// Facade levels map onto the default levels (`Error` → `ERROR`,
/// `Warn` → `WARNING`, `Info` → `INFO`, `Debug` → `DEBUG`,
/// `Trace` → `TRACE`), so the core's minimum priority and enabled switch
/// gate facade records exactly like native ones. The facade's file and line
/// become the record's location.
#[derive(Debug)]
pub struct LiteLogger {
    core: &'static LoggerCore,
}

impl LiteLogger {
    pub const fn new(core: &'static LoggerCore) -> Self {
        Self { core }
    }
}

impl Log for LiteLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.core.config().allows(level_for(metadata.level()).priority())
    }

    fn log(&self, record: &log::Record<'_>) {
        let location = record
            .file()
            .map(|file| Location::new(file, record.line().unwrap_or(0)));

        let mut out = self.core.create_record(level_for(record.level()), location);
        if out.is_active() {
            out.append(*record.args());
        }
    }

    fn flush(&self) {}
}

/// The level a facade record is logged at.
pub fn level_for(level: log::Level) -> &'static Level {
    match level {
        log::Level::Error => &ERROR,
        log::Level::Warn => &WARNING,
        log::Level::Info => &INFO,
        log::Level::Debug => &DEBUG,
        log::Level::Trace => &TRACE,
    }
}

lazy_static! {
    static ref GLOBAL_BRIDGE: LiteLogger = LiteLogger::new(global());
}

/// Installs the process-wide core as the [`log`] facade's logger.
///
/// The facade's own maximum level is opened fully; filtering is left to the
/// core's configuration so it can change at runtime.
///
/// # Errors
///
/// Fails if a logger has already been installed.
///
/// # Examples
///
/// ```
/// logger_lite::log_bridge::install().unwrap();
/// log::info!("listening on port {}", 8080);
/// ```
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&*GLOBAL_BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Like [`install`], routing the facade into `core` instead of the
/// process-wide one.
pub fn install_with(core: &'static LoggerCore) -> Result<(), SetLoggerError> {
    log::set_logger(Box::leak(Box::new(LiteLogger::new(core))))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(log::Level::Error).name(), "ERROR");
        assert_eq!(level_for(log::Level::Warn).name(), "WARNING");
        assert_eq!(level_for(log::Level::Info).name(), "INFO");
        assert_eq!(level_for(log::Level::Debug).name(), "DEBUG");
        assert_eq!(level_for(log::Level::Trace).name(), "TRACE");
    }

    #[test]
    fn test_enabled_follows_core_config() {
        let core: &'static LoggerCore = Box::leak(Box::new(LoggerCore::new(MemorySink::new())));
        let logger = LiteLogger::new(core);
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let info = Metadata::builder().level(log::Level::Info).build();

        core.config().set_min_priority(WARNING.priority());
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));

        core.config().set_enabled(false);
        assert!(!logger.enabled(&warn));
    }

    #[test]
    fn test_log_writes_through_core() {
        let sink = MemorySink::new();
        let core: &'static LoggerCore = Box::leak(Box::new(LoggerCore::new(sink.clone())));
        core.config().set_coloring(false);
        let logger = LiteLogger::new(core);

        logger.log(
            &log::Record::builder()
                .level(log::Level::Error)
                .file(Some("src/db/pool.rs"))
                .line(Some(17))
                .args(format_args!("pool exhausted: {} waiters", 12))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("no location"))
                .build(),
        );

        assert_eq!(
            sink.lines(),
            vec!["[ERROR] [pool.rs:17] pool exhausted: 12 waiters", "[INFO] no location"]
        );
    }
}
