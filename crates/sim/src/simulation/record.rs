//! Tagged simulation output.

use crate::base::{GenerationStats, ParameterSet, ReplicateMatrix, Trajectory};
use crate::errors::SimulationError;
use crate::simulation::SimulationMode;

/// The output of one parameter set, joined with its inputs.
///
/// Deterministic simulations hold a single-row matrix. Hybrid and
/// deterministic simulations also keep the noise-free trajectory in
/// `baseline`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRecord {
    /// 0-based position of the parameter set in the input collection
    pub simulation_id: usize,
    /// The originating parameter set, including inert metadata
    pub parameters: ParameterSet,
    /// Pipeline that produced the observations
    pub mode: SimulationMode,
    /// One row per replicate, one column per generation
    pub matrix: ReplicateMatrix,
    /// Deterministic trajectory, when the mode computes one
    pub baseline: Option<Trajectory>,
}

impl SimulationRecord {
    /// Number of observation rows this record contributes to a result table.
    pub fn row_count(&self) -> usize {
        self.matrix.replicates()
    }

    /// Index of the last simulated generation.
    pub fn generations(&self) -> usize {
        self.matrix.generations()
    }

    /// Mean and standard deviation at the last generation.
    pub fn final_stats(&self) -> GenerationStats {
        self.matrix.final_stats()
    }
}

/// A parameter set that could not be simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    pub simulation_id: usize,
    pub parameters: ParameterSet,
    pub error: SimulationError,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Successful simulations in input order
    pub records: Vec<SimulationRecord>,
    /// Rejected parameter sets in input order
    pub failures: Vec<RecordFailure>,
    /// Set when the run stopped early through its cancellation flag
    pub cancelled: bool,
}

impl RunReport {
    /// True when every parameter set was simulated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }

    /// Total observation rows across all records.
    pub fn total_rows(&self) -> usize {
        self.records.iter().map(SimulationRecord::row_count).sum()
    }

    /// Find a record by simulation id.
    pub fn record(&self, simulation_id: usize) -> Option<&SimulationRecord> {
        self.records
            .binary_search_by_key(&simulation_id, |r| r.simulation_id)
            .ok()
            .map(|i| &self.records[i])
    }
}
