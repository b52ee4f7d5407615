use std::env;
use std::time::Instant;

use logger_lite::level::defaults::INFO;
use logger_lite::log_record;

// Log lines go to stdout; the timing summary goes to stderr so it survives
// `throughput > /dev/null`.

fn bench_with_output(count: usize) -> f64 {
    let start = Instant::now();
    for i in 0..count {
        log_record!(INFO, "Log message number ", i);
    }
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    report("With output", count, duration_ms);
    duration_ms
}

fn bench_without_output(count: usize) -> f64 {
    let was_enabled = logger_lite::is_enabled();
    logger_lite::set_enabled(false);

    let start = Instant::now();
    for i in 0..count {
        log_record!(INFO, "Log message number ", i);
    }
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    logger_lite::set_enabled(was_enabled);

    report("Without output", count, duration_ms);
    duration_ms
}

fn report(label: &str, count: usize, duration_ms: f64) {
    eprintln!("{}: Logged {} messages in {:.3} ms", label, count, duration_ms);
    eprintln!("{} rate: {:.0} logs/sec", label, count as f64 / (duration_ms / 1000.0));
}

fn main() {
    let count = env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1_000_000);

    logger_lite::init();

    let with_output = bench_with_output(count);
    let without_output = bench_without_output(count);

    if without_output > 0.0 {
        eprintln!("Suppression speedup: {:.2}x", with_output / without_output);
    }
}
