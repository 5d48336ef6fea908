//! Final state output.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use tracker_core::RegistrySnapshot;
use tracker_runtime::{TrackerEvent, TrackerSession};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Crafted table and pouch contents
    Summary,
    /// Full JSON output including every published event
    Json,
}

#[derive(Serialize)]
pub struct Report {
    pub registry: RegistrySnapshot,
    pub pouch: String,
    pub events: Vec<TrackerEvent>,
}

impl Report {
    pub fn new(session: &TrackerSession, events: Vec<TrackerEvent>) -> Self {
        Self {
            registry: session.snapshot(),
            pouch: session.pouch_summary(),
            events,
        }
    }

    pub fn print(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Summary => {
                self.print_summary();
                Ok(())
            }
            OutputFormat::Json => self.print_json(),
        }
    }

    fn print_summary(&self) {
        println!("{}", style("=== Runecrafting Summary ===").bold().green());
        println!();

        println!("{}", style("Crafted:").bold().yellow());
        let mut any = false;
        for row in self.registry.visible_rows() {
            any = true;
            println!(
                "  {:<8} {:>8}  @ {:>6} gp = {:>10} gp",
                row.name,
                row.crafted,
                row.unit_value,
                row.value()
            );
        }
        if !any {
            println!("  (nothing yet)");
        }
        println!(
            "  {} {} gp",
            style("Total:").bold().cyan(),
            self.registry.total_value
        );
        println!();

        println!("{} {}", style("Pouch:").bold().yellow(), self.pouch);
        println!("{} {}", style("Events:").bold().yellow(), self.events.len());
    }

    fn print_json(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")?;
        println!("{}", json);
        Ok(())
    }
}
