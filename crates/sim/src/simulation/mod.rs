//! Simulation engines, replication and batch execution.
//!
//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `allelic_sim::simulation`.
//!
//! - `DeterministicEngine`: noise-free mutation-only trajectories.
//! - `StochasticEngine`: single Wright-Fisher paths and binomial draws around
//!   a baseline.
//! - `ReplicateAggregator`: runs independent replicates of a
//!   `ReplicateModel` and stacks them into a `ReplicateMatrix`.
//! - `SimulationRunner`: runs the configured mode for a whole batch of
//!   parameter sets, built with `RunnerBuilder`.
//! - `ParameterGenerator`: draws random parameter tables.

pub mod aggregator;
pub mod builder;
pub mod configs;
pub mod deterministic;
pub mod generator;
pub mod record;
pub mod runner;
pub mod stochastic;

pub use aggregator::{ReplicateAggregator, ReplicateModel};
pub use builder::RunnerBuilder;
pub use configs::{RunConfig, SimulationMode, DEFAULT_MAX_CELLS, DEFAULT_REPLICATES};
pub use deterministic::{deterministic_trajectory, DeterministicEngine};
pub use generator::{GeneratorConfig, ParameterGenerator, SizeClass, UniformRange};
pub use record::{RecordFailure, RunReport, SimulationRecord};
pub use runner::SimulationRunner;
pub use stochastic::{HybridModel, StochasticEngine, WrightFisherModel};
