//! Builder pattern for creating simulation runners.
//!
//! Provides a fluent API for configuring a [`SimulationRunner`] with
//! sensible defaults and validation.

pub use crate::errors::BuilderError;
use crate::simulation::{RunConfig, SimulationMode, SimulationRunner};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Builder for constructing [`SimulationRunner`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use allelic_sim::base::ParameterSet;
/// use allelic_sim::simulation::{SimulationMode, SimulationRunner};
///
/// let runner = SimulationRunner::builder()
///     .mode(SimulationMode::Hybrid)
///     .replicates(50)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let report = runner.run_all(&[ParameterSet::new(100, 0.5, 20, 0.001)]);
/// assert_eq!(report.records[0].row_count(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct RunnerBuilder {
    config: RunConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunnerBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
            cancel: None,
        }
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: RunConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Set the simulation mode (default: Wright-Fisher).
    pub fn mode(mut self, mode: SimulationMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the number of replicates per parameter set (default: 100).
    pub fn replicates(mut self, replicates: usize) -> Self {
        self.config.replicates = replicates;
        self
    }

    /// Set the master seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable or disable rayon parallelism (default: enabled).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Cap the matrix size of a single simulation, in cells.
    pub fn max_cells(mut self, max_cells: usize) -> Self {
        self.config.max_cells = max_cells;
        self
    }

    /// Observe a shared cancellation flag.
    pub fn cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Build the runner.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<SimulationRunner, BuilderError> {
        let runner = SimulationRunner::new(self.config)?;
        Ok(match self.cancel {
            Some(flag) => runner.with_cancellation(flag),
            None => runner,
        })
    }
}
