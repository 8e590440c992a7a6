//! Escape-probability timing probe.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does a million escape
//!   trials take?" alongside the estimate itself.
//! - The box matches the original experiment's quarter-inset square.

use std::time::Instant;

use monte::escape::EscapeSimulator;
use monte::sample::seeded;

fn main() {
    let iterations = 1_000_000u64;
    let sim = EscapeSimulator::new(0.25, 0.25, 0.75, 0.75, iterations);

    let start = Instant::now();
    let report = sim.run(seeded(42)).expect("non-zero iteration count");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("{report}");
    println!("escaped={} trials={}", report.escaped, report.iterations);
    println!("run_time_ms={elapsed_ms:.3}");
}
