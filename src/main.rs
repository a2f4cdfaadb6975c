//! `folio-replay` - replay an input trace through the portfolio controllers
//!
//! Reads a JSON trace of timestamped wheel, scroll, viewport, tap and unmount
//! events, plays it against the gallery and header on a logical clock, and
//! prints every intent the controllers emit.
//!
//! ```text
//! folio-replay <trace.json> [--config <folio.json>] [--settle-ms <ms>]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use folio::{
    config::ConfigManager,
    error::user_facing_message,
    replay::{ReplaySession, Trace},
    utils,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Command-line arguments accepted by `folio-replay`
#[derive(Parser, Debug)]
#[command(
    name = "folio-replay",
    version,
    about = "Replay an input trace through the gallery and header controllers"
)]
struct Args {
    /// JSON trace to replay
    #[arg(value_name = "TRACE")]
    trace_path: PathBuf,
    /// Configuration file (default: $FOLIO_HOME/folio.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Extra time after the last event during which pending timers may fire
    #[arg(long, value_name = "MS", default_value_t = 0)]
    settle_ms: u64,
}

impl Args {
    fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .map_err(|e| anyhow::anyhow!(user_facing_message(&e)))
    .context("Failed to load configuration")?;

    utils::init_logging(&config.logging).context("Failed to initialize logging system")?;
    info!("folio-replay v{} starting", env!("CARGO_PKG_VERSION"));

    let trace = Trace::load(&args.trace_path)
        .map_err(|e| {
            error!("Trace {} rejected: {}", args.trace_path.display(), e);
            anyhow::anyhow!(user_facing_message(&e))
        })
        .with_context(|| format!("Failed to read trace {}", args.trace_path.display()))?;

    let mut session = ReplaySession::play(&config, &trace).context("Failed to replay trace")?;
    if !args.settle().is_zero() {
        let end = trace.events.last().map_or(Duration::ZERO, |event| event.at());
        session.run_until(end + args.settle());
    }

    for record in session.records() {
        println!("{record}");
    }
    println!(
        "final: index {} / {}, header {:?}, {} wheel events captured",
        session.gallery().current_index(),
        session.gallery().len(),
        session.header().mode(),
        session.prevented_wheel_events()
    );

    info!("Replay finished with {} records", session.records().len());
    Ok(())
}
