pub mod controller;

pub use controller::AutomatonController;

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;

use casim_core::codi::{CoDi, CoDiCellState};
use casim_core::config::CoDiConfig;
use casim_core::metrics::StepMetrics;
use casim_core::Stats;

/// How per-step stats are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    JsonLines,
}

/// Headless CoDi run: steps the automaton a fixed number of times and
/// reports stats after each step.
pub struct App {
    pub controller: AutomatonController<CoDi>,
    pub config: CoDiConfig,
    pub metrics: StepMetrics,
    pub format: OutputFormat,
}

impl App {
    pub fn new(config: CoDiConfig, format: OutputFormat) -> Result<Self> {
        config.validate()?;
        let codi = CoDi::from_config(&config).context("failed to build CoDi automaton")?;
        Ok(Self {
            controller: AutomatonController::new(codi),
            metrics: StepMetrics::new(config.run.log_every),
            config,
            format,
        })
    }

    /// Runs up to `run.max_steps` steps, writing stats to `out` after each,
    /// and returns the final stats.
    pub fn run(&mut self, out: &mut impl Write) -> Result<Stats<CoDiCellState>> {
        tracing::info!(
            max_steps = self.config.run.max_steps,
            layer = self.controller.automaton().layer(),
            "Starting headless run"
        );

        let mut steps = 0;
        while steps < self.config.run.max_steps && self.controller.has_next() {
            let started = Instant::now();
            self.controller.next();
            self.metrics.record_step(started.elapsed());
            steps += 1;

            self.write_stats(out, &self.controller.stats())?;
        }
        out.flush()?;

        let stats = self.controller.stats();
        tracing::info!(
            steps,
            phase = ?self.controller.automaton().phase(),
            busy_ms = self.metrics.busy().as_millis() as u64,
            "Headless run finished"
        );
        Ok(stats)
    }

    fn write_stats(&self, out: &mut impl Write, stats: &Stats<CoDiCellState>) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{stats}")?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut *out, stats)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
