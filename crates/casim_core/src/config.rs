//! Configuration for CoDi runs.
//!
//! Strongly-typed structures mapping to a `config.toml` file. Every section
//! and field is optional in the file; anything left out falls back to the
//! values in the `Default` impls.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [lattice]
//! width = 24
//! height = 24
//! depth = 24
//! seed = 42
//! neuron_density = 0.02
//! chromosome_density = 0.5
//!
//! [display]
//! layer = 12
//!
//! [run]
//! max_steps = 500
//! log_every = 50
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted extent on any lattice axis.
pub const MAX_DIMENSION: usize = 256;

/// Shape of the lattice and the parameters used to seed it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    /// Seed for lattice generation and the signaling setup draw.
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Probability that a site starts as a NEURON.
    pub neuron_density: f64,
    /// Probability that each growth direction bit is set in a chromosome.
    pub chromosome_density: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            depth: 16,
            seed: None,
            neuron_density: 0.02,
            chromosome_density: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// X index of the displayed slice.
    pub layer: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub max_steps: u64,
    /// Log stats every this many steps; 0 disables periodic logging.
    pub log_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: 200,
            log_every: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CoDiConfig {
    pub lattice: LatticeConfig,
    pub display: DisplayConfig,
    pub run: RunConfig,
}

impl CoDiConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Every lattice axis is in `1..=MAX_DIMENSION`
    /// - Densities are probabilities in `[0.0, 1.0]`
    /// - The display layer indexes an existing slice
    pub fn validate(&self) -> anyhow::Result<()> {
        let lattice = &self.lattice;
        for (axis, extent) in [
            ("width", lattice.width),
            ("height", lattice.height),
            ("depth", lattice.depth),
        ] {
            anyhow::ensure!(extent > 0, "Lattice {axis} must be positive");
            anyhow::ensure!(
                extent <= MAX_DIMENSION,
                "Lattice {axis} too large (max {MAX_DIMENSION})"
            );
        }
        anyhow::ensure!(
            (0.0..=1.0).contains(&lattice.neuron_density),
            "Neuron density must be within [0, 1]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&lattice.chromosome_density),
            "Chromosome density must be within [0, 1]"
        );
        anyhow::ensure!(
            self.display.layer < lattice.width,
            "Display layer {} outside lattice width {}",
            self.display.layer,
            lattice.width
        );
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file. A missing file yields the
    /// defaults; an unreadable or invalid one is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| e.context(format!("invalid config in {}", path.display())))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }
}
