//! Run configuration.
//!
//! [`RunConfig`] is plain serde data so it can be stored next to results or
//! loaded from a JSON file to reproduce a batch.

use crate::errors::BuilderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of Monte Carlo replicates per parameter set.
pub const DEFAULT_REPLICATES: usize = 100;

/// Default cap on `replicates × (generations + 1)` per simulation
/// (about 400 MB of `f64` values).
pub const DEFAULT_MAX_CELLS: usize = 50_000_000;

/// Which pipeline to run for each parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationMode {
    /// Independent Wright-Fisher chains with mutation and drift.
    #[default]
    WrightFisher,
    /// Binomial replicates around one shared deterministic trajectory.
    Hybrid,
    /// A single mutation-only trajectory, no replicates.
    Deterministic,
}

impl SimulationMode {
    pub const ALL: [SimulationMode; 3] = [
        SimulationMode::WrightFisher,
        SimulationMode::Hybrid,
        SimulationMode::Deterministic,
    ];

    /// Name used on the command line and in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrightFisher => "wright-fisher",
            Self::Hybrid => "hybrid",
            Self::Deterministic => "deterministic",
        }
    }

    /// Whether the mode draws random numbers.
    pub fn is_stochastic(&self) -> bool {
        !matches!(self, Self::Deterministic)
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wright-fisher" | "wf" => Ok(Self::WrightFisher),
            "hybrid" | "deterministic-monte-carlo" => Ok(Self::Hybrid),
            "deterministic" => Ok(Self::Deterministic),
            other => Err(format!(
                "Unknown simulation mode '{other}'. Use: wright-fisher, hybrid, or deterministic"
            )),
        }
    }
}

/// Settings shared by every simulation in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Pipeline to run
    pub mode: SimulationMode,
    /// Monte Carlo replicates per parameter set (ignored in deterministic mode)
    pub replicates: usize,
    /// Master RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Spread work over the rayon thread pool
    pub parallel: bool,
    /// Largest replicate matrix (in cells) a single simulation may allocate
    pub max_cells: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: SimulationMode::default(),
            replicates: DEFAULT_REPLICATES,
            seed: None,
            parallel: true,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl RunConfig {
    /// Create a configuration for `mode` with default settings.
    pub fn new(mode: SimulationMode, replicates: usize, seed: Option<u64>) -> Self {
        Self {
            mode,
            replicates,
            seed,
            ..Self::default()
        }
    }

    /// Check the configuration values.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.replicates == 0 {
            return Err(BuilderError::InvalidParameter(
                "replicates must be at least 1".into(),
            ));
        }
        if self.max_cells == 0 {
            return Err(BuilderError::InvalidParameter(
                "max_cells must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Number of replicate rows each simulation produces under this config.
    pub fn rows_per_simulation(&self) -> usize {
        match self.mode {
            SimulationMode::Deterministic => 1,
            SimulationMode::WrightFisher | SimulationMode::Hybrid => self.replicates,
        }
    }
}
