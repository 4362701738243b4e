//! Wright-Fisher binomial sampling.
//!
//! Genetic drift is modelled by drawing the next generation's allele count
//! `k ~ Binomial(N, p)` and recording the frequency `k / N`. Because `k` lies
//! in `[0, N]` the sampled frequency always lies in `[0, 1]`, and the
//! boundaries are reached exactly (`p = 0` gives `k = 0` with probability 1).

use crate::errors::ParameterError;
use rand::Rng;
use rand_distr::{Binomial, Distribution};

/// Binomial resampling of a population of `N` allele copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrightFisherSampling {
    population_size: u64,
}

impl WrightFisherSampling {
    /// Create a sampler for a population of `population_size` copies.
    ///
    /// # Errors
    /// Returns [`ParameterError::PopulationSize`] for an empty population,
    /// which would make `k / N` undefined.
    pub fn new(population_size: u64) -> Result<Self, ParameterError> {
        if population_size == 0 {
            return Err(ParameterError::PopulationSize(0));
        }
        Ok(Self { population_size })
    }

    pub(crate) fn from_validated(population_size: u64) -> Self {
        debug_assert!(population_size >= 1);
        Self { population_size }
    }

    pub fn population_size(&self) -> u64 {
        self.population_size
    }

    /// Draw the allele count of the next generation given frequency `p`.
    pub fn sample_count<R: Rng + ?Sized>(&self, p: f64, rng: &mut R) -> u64 {
        match Binomial::new(self.population_size, p.clamp(0.0, 1.0)) {
            Ok(binomial) => binomial.sample(rng),
            // Only reachable for NaN, which validated inputs never produce
            Err(_) => 0,
        }
    }

    /// Draw the allele frequency of the next generation given frequency `p`.
    #[inline]
    pub fn sample_frequency<R: Rng + ?Sized>(&self, p: f64, rng: &mut R) -> f64 {
        self.sample_count(p, rng) as f64 / self.population_size as f64
    }
}
