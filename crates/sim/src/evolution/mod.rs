//! Evolution module providing the per-generation state transitions.
//!
//! - **Mutation**: symmetric two-allele mutation toward frequency 0.5
//! - **Drift**: Wright-Fisher binomial resampling of a finite population

pub mod drift;
pub mod mutation;

pub use drift::WrightFisherSampling;
pub use mutation::{SymmetricMutation, EQUILIBRIUM_FREQUENCY};
