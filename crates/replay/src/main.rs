//! Replays recorded host notifications through a tracker session.
//!
//! Run with: `cargo run -p tracker-replay -- --script crates/replay/scripts/sample.ron`

mod report;
mod script;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use tracker_content::{ContentFactory, TrackerContent};
use tracker_runtime::{MemoryHost, OracleManager, TrackerSession};

use report::{OutputFormat, Report};
use script::Script;

/// Replay a notification script and print the resulting tracker state
#[derive(Parser)]
#[command(name = "tracker-replay")]
#[command(about = "Replay host notifications through the runecrafting tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// RON script with prices and notification steps
    #[arg(short, long, value_name = "FILE")]
    script: PathBuf,

    /// Directory with `catalog.ron` / `config.toml` overrides (defaults to bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Cli {
    fn execute(self) -> Result<()> {
        let content = match &self.data_dir {
            Some(dir) => ContentFactory::new(dir).load_content()?,
            None => TrackerContent::embedded()?,
        };
        let script = Script::load(&self.script)
            .with_context(|| format!("Failed to load script: {}", self.script.display()))?;

        let host = Arc::new(MemoryHost::new());
        script.apply_prices(&host);
        let mut session = TrackerSession::new(content, OracleManager::from_host(host.clone()));

        let events = script.run(&mut session, &host);
        tracing::info!(
            "Replayed {} steps, {} events published",
            script.steps.len(),
            events.len()
        );

        Report::new(&session, events).print(self.format)
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().execute()
}
