//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for allele-frequency simulations
//! under genetic drift and symmetric mutation. It includes the parameter
//! and trajectory types, the deterministic and Wright-Fisher engines, Monte
//! Carlo replication, batch execution and CSV storage.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;
pub mod storage;

pub use base::{ModelParams, ParameterSet, ReplicateMatrix, Trajectory};
