use logger_lite::level::defaults::{DEBUG, ERROR, FATAL, INFO, WARNING};
use logger_lite::{log_located, log_record, Level, Rgb};

fn main() {
    logger_lite::init();

    // Default levels
    log_record!(DEBUG, "Hello, world!");
    log_record!(INFO, "Hello, world!");
    log_record!(WARNING, "Hello, world!");
    log_record!(ERROR, "Hello, world!");
    log_record!(FATAL, "Hello, world!");

    // A custom level. Records copy their level, so a temporary is fine too.
    let verbose = Level::new("VERBOSE", Rgb::new(255, 255, 255), 5);
    log_record!(verbose, "Hello, world!");
    log_located!(Level::new("TEMP", Rgb::new(128, 0, 128), 35), "Goodbye, world!");

    log_located!(INFO, "pi is roughly ", std::f64::consts::PI, ", answer is ", 42);

    logger_lite::set_coloring(false);
    log_record!(INFO, "plain ", "text");
}
