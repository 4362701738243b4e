//! Shared default values for the command line.

use allelic_sim::simulation::DEFAULT_REPLICATES;

pub const PARAMETERS_FILE: &str = "input_parameters.csv";
pub const RESULTS_FILE: &str = "simulation_results.csv";
pub const SUMMARY_FILE: &str = "summary.csv";

// Generation
pub const SAMPLE_SIZE: usize = 100;
pub const GENERATOR_SEED: u64 = 42;

pub const REPLICATES: usize = DEFAULT_REPLICATES;

// Rows shown in terminal previews
pub const PREVIEW_ROWS: usize = 5;
