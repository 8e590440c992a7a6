use anyhow::Result;
use clap::{Parser, Subcommand};
use monte::crossing::{sweep_2d, sweep_3d};
use monte::escape::EscapeSimulator;
use monte::expelled::row_of;
use monte::sample::seeded;
use monte::tug::TugSweep;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod summary;

use summary::{write_summary, RunSummary};

#[derive(Parser)]
#[command(name = "monte")]
#[command(about = "Monte-Carlo experiment runner")]
struct Cmd {
    /// Seed for the stochastic experiments
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Optional path for a JSON summary of the run
    #[arg(long)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Probability that a random chord's spanning circle escapes a box
    Escape {
        #[arg(long, default_value_t = 0.25)]
        x1: f64,
        #[arg(long, default_value_t = 0.25)]
        y1: f64,
        #[arg(long, default_value_t = 0.75)]
        x2: f64,
        #[arg(long, default_value_t = 0.75)]
        y2: f64,
        #[arg(long, default_value_t = 100_000)]
        iterations: u64,
    },
    /// Row at which a number leaves the expelled sequence
    Expelled {
        #[arg(long, default_value_t = 11)]
        number: u32,
        #[arg(long, default_value_t = 1246)]
        len: usize,
    },
    /// Tug-of-war starting-offset sweep for an even win ratio
    Tug {
        #[arg(long, default_value_t = 0.05)]
        decrement: f64,
        #[arg(long, default_value_t = 1_000)]
        iterations: u64,
    },
    /// 2D grid single-cross length sweep
    Cross2d {
        #[arg(long, default_value_t = 100_000)]
        trials: u64,
    },
    /// 3D grid single-cross length sweep
    Cross3d {
        #[arg(long, default_value_t = 0.01)]
        step: f64,
        #[arg(long, default_value_t = 100_000)]
        trials: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let summary = match cmd.action {
        Action::Escape {
            x1,
            y1,
            x2,
            y2,
            iterations,
        } => escape(x1, y1, x2, y2, iterations, cmd.seed)?,
        Action::Expelled { number, len } => expelled(number, len)?,
        Action::Tug {
            decrement,
            iterations,
        } => tug(decrement, iterations, cmd.seed)?,
        Action::Cross2d { trials } => cross2d(trials, cmd.seed)?,
        Action::Cross3d { step, trials } => cross3d(step, trials, cmd.seed)?,
    };
    if let Some(out) = cmd.out {
        write_summary(&out, &summary)?;
        tracing::info!(out, "summary written");
    }
    Ok(())
}

fn escape(x1: f64, y1: f64, x2: f64, y2: f64, iterations: u64, seed: u64) -> Result<RunSummary> {
    tracing::info!(x1, y1, x2, y2, iterations, seed, "escape");
    let sim = EscapeSimulator::new(x1, y1, x2, y2, iterations);
    let report = sim.run(seeded(seed))?;
    println!("{report}");
    Ok(RunSummary::new(
        "escape",
        json!({"x1": x1, "y1": y1, "x2": x2, "y2": y2, "iterations": iterations, "seed": seed}),
        json!({"escaped": report.escaped, "probability": report.probability()}),
    ))
}

fn expelled(number: u32, len: usize) -> Result<RunSummary> {
    tracing::info!(number, len, "expelled");
    let row = row_of(number, len)?;
    match row {
        Some(row) => println!("Number {number} was expelled at row {row}"),
        None => println!("Number {number} was never expelled"),
    }
    Ok(RunSummary::new(
        "expelled",
        json!({"number": number, "len": len}),
        json!({"row": row}),
    ))
}

fn tug(decrement: f64, iterations: u64, seed: u64) -> Result<RunSummary> {
    tracing::info!(decrement, iterations, seed, "tug");
    let sweep = TugSweep {
        decrement,
        iterations,
    };
    let report = sweep.run(&mut seeded(seed))?;
    println!("Win ratio: {}", report.ratio);
    println!("Estimated initial marker position: {:.7}", report.start);
    Ok(RunSummary::new(
        "tug",
        json!({"decrement": decrement, "iterations": iterations, "seed": seed}),
        json!({"start": report.start, "ratio": report.ratio}),
    ))
}

fn cross2d(trials: u64, seed: u64) -> Result<RunSummary> {
    tracing::info!(trials, seed, "cross2d");
    let report = sweep_2d(trials, &mut seeded(seed))?;
    println!(
        "Optimal segment length: {:.10} with probability {:.10}",
        report.length, report.probability
    );
    Ok(RunSummary::new(
        "cross2d",
        json!({"trials": trials, "seed": seed}),
        json!({"length": report.length, "probability": report.probability}),
    ))
}

fn cross3d(step: f64, trials: u64, seed: u64) -> Result<RunSummary> {
    tracing::info!(step, trials, seed, "cross3d");
    let report = sweep_3d(step, trials, &mut seeded(seed))?;
    println!(
        "Optimal segment length: {:.10} with probability {:.10}",
        report.length, report.probability
    );
    Ok(RunSummary::new(
        "cross3d",
        json!({"step": step, "trials": trials, "seed": seed}),
        json!({"length": report.length, "probability": report.probability}),
    ))
}
