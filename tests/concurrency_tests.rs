use logger_lite::level::defaults::{INFO, WARNING};
use logger_lite::{LoggerCore, MemorySink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const RECORDS_PER_THREAD: usize = 500;

#[test]
fn test_concurrent_lines_never_interleave() {
    let sink = MemorySink::new();
    let core = Arc::new(LoggerCore::new(sink.clone()));
    let padding = "-".repeat(120);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let core = Arc::clone(&core);
            let padding = padding.clone();
            thread::spawn(move || {
                for i in 0..RECORDS_PER_THREAD {
                    core.create_record(&INFO, None)
                        .append("thread ")
                        .append(t)
                        .append(" record ")
                        .append(i)
                        .append(' ')
                        .append(padding.as_str());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * RECORDS_PER_THREAD);

    let mut next_expected = vec![0usize; THREADS];
    for line in &lines {
        let body = line
            .strip_prefix("\x1b[38;2;0;120;255m[INFO] thread ")
            .and_then(|rest| rest.strip_suffix("\x1b[0m"))
            .unwrap_or_else(|| panic!("malformed line: {:?}", line));
        let (head, tail) = body.split_once(' ').unwrap();
        let t: usize = head.parse().unwrap();
        let rest = tail.strip_prefix("record ").unwrap();
        let (index, pad) = rest.split_once(' ').unwrap();
        let i: usize = index.parse().unwrap();

        assert_eq!(pad, padding, "padding damaged in {:?}", line);
        // Per-thread order is preserved
        assert_eq!(i, next_expected[t]);
        next_expected[t] += 1;
    }
    assert!(next_expected.iter().all(|&n| n == RECORDS_PER_THREAD));
}

#[test]
fn test_config_toggles_race_with_logging() {
    let sink = MemorySink::new();
    let core = Arc::new(LoggerCore::new(sink.clone()));
    core.config().set_coloring(false);
    let stop = Arc::new(AtomicBool::new(false));

    let toggler = {
        let core = Arc::clone(&core);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut flip = false;
            while !stop.load(Ordering::Relaxed) {
                core.config().set_enabled(flip);
                core.config().set_min_priority(if flip { 0 } else { 100 });
                flip = !flip;
            }
        })
    };

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let core = Arc::clone(&core);
            thread::spawn(move || {
                let mut written = 0usize;
                for i in 0..2000 {
                    let mut record = core.create_record(&WARNING, None);
                    if record.is_active() {
                        written += 1;
                    }
                    record.append("w").append(t).append(':').append(i);
                }
                written
            })
        })
        .collect();

    let expected: usize = writers.into_iter().map(|h| h.join().unwrap()).sum();
    stop.store(true, Ordering::Relaxed);
    toggler.join().unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), expected);
    for line in lines {
        assert!(line.starts_with("[WARNING] w"), "unexpected line {:?}", line);
    }
}
