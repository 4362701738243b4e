//! Simulation inputs.
//!
//! [`ParameterSet`] is one row of the input table exactly as read from disk,
//! including values that may be out of range. [`ModelParams`] is the
//! validated form accepted by the engines; it can only be obtained through
//! validation, so an invalid row never reaches a simulation.

use crate::errors::ParameterError;
use crate::evolution::{SymmetricMutation, WrightFisherSampling};
use serde::{Deserialize, Serialize};

/// One row of simulation inputs.
///
/// Integer fields are signed so that negative values in an input table are
/// reported as invalid parameters rather than as parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Effective population size (N)
    #[serde(rename = "Population_Size")]
    pub population_size: i64,
    /// Initial allele frequency (p0)
    #[serde(rename = "Initial_Allele_Frequency")]
    pub initial_frequency: f64,
    /// Number of discrete generations to simulate
    #[serde(rename = "Generations")]
    pub generations: i64,
    /// Selection coefficient; carried as metadata only, never applied
    #[serde(rename = "Selection_Coefficient", default)]
    pub selection_coefficient: Option<f64>,
    /// Symmetric per-generation mutation rate (u)
    #[serde(rename = "Mutation_Rate")]
    pub mutation_rate: f64,
}

impl ParameterSet {
    /// Create a parameter set without a selection coefficient.
    pub fn new(
        population_size: i64,
        initial_frequency: f64,
        generations: i64,
        mutation_rate: f64,
    ) -> Self {
        Self {
            population_size,
            initial_frequency,
            generations,
            selection_coefficient: None,
            mutation_rate,
        }
    }

    /// Attach a selection coefficient as metadata.
    pub fn with_selection(mut self, coefficient: f64) -> Self {
        self.selection_coefficient = Some(coefficient);
        self
    }

    /// Check the model invariants and produce engine inputs.
    pub fn validate(&self) -> Result<ModelParams, ParameterError> {
        let population_size = u64::try_from(self.population_size)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(ParameterError::PopulationSize(self.population_size))?;
        let generations = usize::try_from(self.generations)
            .map_err(|_| ParameterError::Generations(self.generations))?;

        ModelParams::new(
            population_size,
            self.initial_frequency,
            generations,
            self.mutation_rate,
        )
    }
}

impl From<ModelParams> for ParameterSet {
    fn from(params: ModelParams) -> Self {
        Self::new(
            params.population_size as i64,
            params.initial_frequency,
            params.generations as i64,
            params.mutation_rate,
        )
    }
}

/// Validated inputs for a single simulation.
///
/// Invariants: `population_size >= 1`, `0 < initial_frequency < 1`,
/// `0 <= mutation_rate < 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    population_size: u64,
    initial_frequency: f64,
    generations: usize,
    mutation_rate: f64,
}

impl ModelParams {
    /// Create validated model parameters.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn new(
        population_size: u64,
        initial_frequency: f64,
        generations: usize,
        mutation_rate: f64,
    ) -> Result<Self, ParameterError> {
        if population_size == 0 {
            return Err(ParameterError::PopulationSize(0));
        }
        // Negated comparisons also reject NaN
        if !(initial_frequency > 0.0 && initial_frequency < 1.0) {
            return Err(ParameterError::InitialFrequency(initial_frequency));
        }
        if !(0.0..1.0).contains(&mutation_rate) {
            return Err(ParameterError::MutationRate(mutation_rate));
        }

        Ok(Self {
            population_size,
            initial_frequency,
            generations,
            mutation_rate,
        })
    }

    pub fn population_size(&self) -> u64 {
        self.population_size
    }

    pub fn initial_frequency(&self) -> f64 {
        self.initial_frequency
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Number of values in a trajectory for these parameters (`generations + 1`).
    pub fn trajectory_len(&self) -> usize {
        self.generations + 1
    }

    /// The mutation step implied by these parameters.
    pub fn mutation(&self) -> SymmetricMutation {
        SymmetricMutation::from_validated(self.mutation_rate)
    }

    /// The binomial sampling step implied by these parameters.
    pub fn sampling(&self) -> WrightFisherSampling {
        WrightFisherSampling::from_validated(self.population_size)
    }
}
