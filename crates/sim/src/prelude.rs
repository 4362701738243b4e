//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use allelic_sim::prelude::*;
//!
//! let trajectory = deterministic_trajectory(100, 0.2, 10, 0.01).unwrap();
//! assert_eq!(trajectory.len(), 11);
//! ```

pub use crate::base::{GenerationStats, ModelParams, ParameterSet, ReplicateMatrix, Trajectory};
pub use crate::errors::{self, ParameterError, SimulationError, StorageError};
pub use crate::evolution::{SymmetricMutation, WrightFisherSampling};
pub use crate::simulation::{
    deterministic_trajectory, DeterministicEngine, ReplicateAggregator, ReplicateModel,
    RunConfig, RunReport, RunnerBuilder, SimulationMode, SimulationRecord, SimulationRunner,
    StochasticEngine,
};
