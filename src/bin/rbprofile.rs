//! Profile append/get latency of every buffer implementation.

use anyhow::Context;
use chanring::profile::{ProfileConfig, TimingSummary, candidates};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Measure append-then-get latency across chunk sizes
#[derive(Parser, Debug)]
#[command(name = "rbprofile", version, about)]
struct Cli {
    /// Samples per second
    #[arg(long, default_value_t = 1000)]
    sample_rate: usize,

    /// Seconds of history kept in the buffer
    #[arg(long, default_value_t = 60)]
    seconds: usize,

    /// Channels per sample
    #[arg(long, default_value_t = 128)]
    channels: usize,

    /// Timed iterations per chunked scenario
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Timed iterations for the single-row scenario
    #[arg(long, default_value_t = 10_000)]
    single_row_iterations: usize,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ProfileConfig {
        ProfileConfig {
            sample_rate: self.sample_rate,
            buffer_seconds: self.seconds,
            channels: self.channels,
            iterations: self.iterations,
            single_row_iterations: self.single_row_iterations,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = cli.config();
    for candidate in candidates() {
        println!("Testing {}", candidate.name);
        for scenario in config.scenarios() {
            let times = scenario
                .run(&candidate)
                .with_context(|| format!("scenario {} failed", scenario.label))?;
            match TimingSummary::from_durations(&times) {
                Some(summary) => println!("{:>6}  {summary}", scenario.label),
                None => println!("{:>6}  no iterations", scenario.label),
            }
        }
    }
    Ok(())
}
