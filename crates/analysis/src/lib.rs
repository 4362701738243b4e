//! # Analysis Crate
//!
//! Summary statistics over allele-frequency ensembles produced by
//! `allelic-sim`, either straight from a run report or from a result table
//! read back from disk.

pub mod analysis;

pub use analysis::{
    absorption, mean_trajectory, summarize, variance_trajectory, write_summary, AbsorptionCounts,
    SimulationSummary, SimulationView,
};
