//! Core data types for allele-frequency simulations.
//!
//! This module provides the input parameter types, trajectories, replicate
//! matrices and the sample statistics computed over them.

mod params;
pub mod stats;
mod trajectory;

pub use params::{ModelParams, ParameterSet};
pub use trajectory::{GenerationStats, ReplicateMatrix, Trajectory};
