use std::env;
use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::time::Instant;

// Runs the `throughput` binary repeatedly and summarises its timings.
// Usage: bench_stats [runs] [messages per run]

fn main() -> io::Result<()> {
    let mut args = env::args().skip(1);
    let num_runs = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let count = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1_000_000);

    println!("Running throughput benchmark {} times ({} messages each)...", num_runs, count);

    let mut with_output_times = Vec::with_capacity(num_runs);
    let mut without_output_times = Vec::with_capacity(num_runs);
    let mut speedups = Vec::with_capacity(num_runs);

    let start_time = Instant::now();

    for i in 1..=num_runs {
        print!("Run {}/{}... ", i, num_runs);
        io::stdout().flush()?;

        let output = Command::new("cargo")
            .args(["run", "--release", "--quiet", "--bin", "throughput", "--"])
            .arg(count.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if !output.status.success() {
            eprintln!("Benchmark failed on run {}", i);
            continue;
        }

        let report = String::from_utf8_lossy(&output.stderr);

        let with_output = parse_value(&report, "With output: Logged ", " ms");
        if let Some(time) = with_output {
            with_output_times.push(time);
        }

        let without_output = parse_value(&report, "Without output: Logged ", " ms");
        if let Some(time) = without_output {
            without_output_times.push(time);
        }

        match (with_output, without_output) {
            (Some(with), Some(without)) if without > 0.0 => {
                let speedup = with / without;
                speedups.push(speedup);
                println!("Suppression speedup: {:.2}x", speedup);
            }
            _ => println!("no timings found"),
        }
    }

    let elapsed = start_time.elapsed();
    println!("\nCompleted {} runs in {:.2?}", with_output_times.len(), elapsed);

    println!("\n===== PERFORMANCE SUMMARY =====");

    report("With output, time (ms)", &with_output_times);
    report("With output, rate (logs/sec)", &rates(count, &with_output_times));
    report("Without output, time (ms)", &without_output_times);
    report("Without output, rate (logs/sec)", &rates(count, &without_output_times));
    report("Suppression speedup (with / without)", &speedups);

    Ok(())
}

/// Reads the `in <value><suffix>` figure from the first line containing
/// `prefix`.
fn parse_value(text: &str, prefix: &str, suffix: &str) -> Option<f64> {
    let line = text.lines().find(|line| line.contains(prefix))?;
    let start = line.find(" in ")? + " in ".len();
    let end = line[start..].find(suffix)?;
    line[start..start + end].parse::<f64>().ok()
}

fn rates(count: usize, times_ms: &[f64]) -> Vec<f64> {
    times_ms
        .iter()
        .filter(|&&ms| ms > 0.0)
        .map(|&ms| count as f64 / (ms / 1000.0))
        .collect()
}

/// Spread of one measured series.
struct Summary {
    samples: usize,
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    std_dev: f64,
}

impl Summary {
    fn of(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (&min, &max) = (sorted.first()?, sorted.last()?);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = match n % 2 {
            0 => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
            _ => sorted[n / 2],
        };
        let std_dev = (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64).sqrt();

        Some(Self { samples: n, min, max, mean, median, std_dev })
    }

    fn relative_spread(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            self.std_dev / self.mean * 100.0
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  samples {:>4}   median {:.3}   mean {:.3}", self.samples, self.median, self.mean)?;
        write!(
            f,
            "  range [{:.3}, {:.3}]   std dev {:.3} ({:.2}%)",
            self.min,
            self.max,
            self.std_dev,
            self.relative_spread()
        )
    }
}

fn report(title: &str, values: &[f64]) {
    if let Some(summary) = Summary::of(values) {
        println!("\n{}:\n{}", title, summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_odd_and_even_series() {
        let odd = Summary::of(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!((odd.min, odd.max, odd.median, odd.mean), (1.0, 3.0, 2.0, 2.0));

        let even = Summary::of(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(even.median, 2.5);
        assert_eq!(even.samples, 4);
        assert!((even.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_of_empty_series() {
        assert!(Summary::of(&[]).is_none());
    }

    #[test]
    fn test_parse_value_reads_timing_line() {
        let report = "With output: Logged 1000 messages in 12.5 ms\nWithout output: Logged 1000 messages in 0.5 ms\n";
        assert_eq!(parse_value(report, "With output: Logged ", " ms"), Some(12.5));
        assert_eq!(parse_value(report, "Without output: Logged ", " ms"), Some(0.5));
        assert_eq!(parse_value(report, "Speedup", " ms"), None);
    }
}
