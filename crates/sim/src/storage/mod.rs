//! Storage module for persisting simulation data.
//!
//! This module provides CSV tables for parameter sets and for wide
//! per-replicate results, so batches can be generated, simulated and
//! analysed in separate steps.

mod parameters;
mod results;

pub use parameters::{read_parameters, read_parameters_from, write_parameters, write_parameters_to};
pub use results::{
    generation_label, read_results, read_results_from, write_results, write_results_to,
    StoredSimulation, GENERATION_PREFIX,
};
