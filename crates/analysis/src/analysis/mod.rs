//! Ensemble analysis tools for allelic
//!
//! This module provides:
//! - Per-simulation summary tables (final mean and standard deviation)
//! - Absorption counts (lost, fixed, segregating)
//! - Per-generation mean and variance trajectories

pub mod absorption;
pub mod summary;
pub mod temporal;

use allelic_sim::base::{ParameterSet, ReplicateMatrix};
use allelic_sim::simulation::SimulationRecord;
use allelic_sim::storage::StoredSimulation;

// Re-export commonly used functions
pub use absorption::{absorption, absorption_times, AbsorptionCounts};
pub use summary::{summarize, summarize_one, write_summary, write_summary_to, SimulationSummary};
pub use temporal::{expected_drift_variance, mean_trajectory, variance_trajectory};

/// Borrowed view of one simulation, whether it came from a run report or
/// from a stored result table.
#[derive(Debug, Clone, Copy)]
pub struct SimulationView<'a> {
    pub simulation_id: usize,
    pub parameters: &'a ParameterSet,
    pub matrix: &'a ReplicateMatrix,
}

impl<'a> From<&'a SimulationRecord> for SimulationView<'a> {
    fn from(record: &'a SimulationRecord) -> Self {
        Self {
            simulation_id: record.simulation_id,
            parameters: &record.parameters,
            matrix: &record.matrix,
        }
    }
}

impl<'a> From<&'a StoredSimulation> for SimulationView<'a> {
    fn from(stored: &'a StoredSimulation) -> Self {
        Self {
            simulation_id: stored.simulation_id,
            parameters: &stored.parameters,
            matrix: &stored.matrix,
        }
    }
}
