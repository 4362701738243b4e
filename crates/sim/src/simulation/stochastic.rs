//! Stochastic trajectories.
//!
//! Two replicate models share the binomial sampling step but differ in what
//! feeds it:
//!
//! - [`WrightFisherModel`]: each replicate is its own Markov chain. The
//!   mutation step is applied to the replicate's previous *sampled*
//!   frequency, then drift resamples it.
//! - [`HybridModel`]: a single deterministic trajectory supplies the
//!   sampling probability at every generation; replicates are independent
//!   binomial draws around that shared path and never feed back into it.
//!
//! The two produce statistically different ensembles (the hybrid variance
//! stays at `p_t(1 − p_t)/N`, while Wright-Fisher variance accumulates over
//! generations) and are kept as separate types.

use crate::base::{ModelParams, Trajectory};
use crate::errors::ShapeError;
use crate::evolution::WrightFisherSampling;
use crate::simulation::aggregator::ReplicateModel;
use rand::Rng;

/// Single-path stochastic simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticEngine;

impl StochasticEngine {
    /// One Wright-Fisher path with mutation followed by binomial drift.
    ///
    /// Absorption is not special-cased: with `u > 0` a lost or fixed allele
    /// can be reintroduced by mutation before the next sampling step.
    pub fn simulate_one<R: Rng + ?Sized>(params: &ModelParams, rng: &mut R) -> Trajectory {
        let mutation = params.mutation();
        let sampling = params.sampling();
        let mut frequencies = Vec::with_capacity(params.trajectory_len());

        let mut p = params.initial_frequency();
        frequencies.push(p);
        for _ in 0..params.generations() {
            let mutated = mutation.apply(p);
            p = sampling.sample_frequency(mutated, rng);
            frequencies.push(p);
        }

        Trajectory::from_engine(frequencies)
    }

    /// One replicate of binomial draws around a fixed baseline trajectory.
    ///
    /// Every generation, including generation 0, records `k / N` with
    /// `k ~ Binomial(N, baseline[t])`.
    pub fn simulate_seeded<R: Rng + ?Sized>(
        sampling: &WrightFisherSampling,
        baseline: &Trajectory,
        rng: &mut R,
    ) -> Trajectory {
        let frequencies = baseline
            .iter()
            .map(|p| sampling.sample_frequency(p, rng))
            .collect();
        Trajectory::from_engine(frequencies)
    }
}

/// Independent Wright-Fisher chains.
#[derive(Debug, Clone, Copy)]
pub struct WrightFisherModel {
    params: ModelParams,
}

impl WrightFisherModel {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }
}

impl ReplicateModel for WrightFisherModel {
    fn generations(&self) -> usize {
        self.params.generations()
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory {
        StochasticEngine::simulate_one(&self.params, rng)
    }
}

/// Binomial draws around a shared deterministic baseline.
#[derive(Debug, Clone)]
pub struct HybridModel<'a> {
    sampling: WrightFisherSampling,
    baseline: &'a Trajectory,
}

impl<'a> HybridModel<'a> {
    pub fn new(sampling: WrightFisherSampling, baseline: &'a Trajectory) -> Self {
        Self { sampling, baseline }
    }

    /// Build from validated parameters and a baseline computed for them.
    ///
    /// # Errors
    /// Returns [`ShapeError::RowLength`] if the baseline does not span
    /// `params.generations()` generations.
    pub fn for_params(params: &ModelParams, baseline: &'a Trajectory) -> Result<Self, ShapeError> {
        if baseline.len() != params.trajectory_len() {
            return Err(ShapeError::RowLength {
                row: 0,
                expected: params.trajectory_len(),
                found: baseline.len(),
            });
        }
        Ok(Self::new(params.sampling(), baseline))
    }

    pub fn baseline(&self) -> &Trajectory {
        self.baseline
    }
}

impl ReplicateModel for HybridModel<'_> {
    fn generations(&self) -> usize {
        self.baseline.generations()
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory {
        StochasticEngine::simulate_seeded(&self.sampling, self.baseline, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::DeterministicEngine;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn params(n: u64, p0: f64, generations: usize, u: f64) -> ModelParams {
        ModelParams::new(n, p0, generations, u).unwrap()
    }

    #[test]
    fn test_simulate_one_shape_and_bounds() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let t = StochasticEngine::simulate_one(&params(20, 0.3, 50, 0.01), &mut rng);

        assert_eq!(t.len(), 51);
        assert_eq!(t.initial(), 0.3);
        assert!(t.iter().all(|p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_sampled_values_are_multiples_of_one_over_n() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let t = StochasticEngine::simulate_one(&params(8, 0.5, 30, 0.05), &mut rng);

        for p in t.iter().skip(1) {
            let k = p * 8.0;
            assert!((k - k.round()).abs() < 1e-9, "{p} is not k/8");
        }
    }

    #[test]
    fn test_no_mutation_absorbing_states() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let t = StochasticEngine::simulate_one(&params(4, 0.5, 500, 0.0), &mut rng);

        let first_absorbed = t
            .iter()
            .position(|p| p == 0.0 || p == 1.0)
            .expect("N = 4 chain should absorb within 500 generations");
        let state = t.get(first_absorbed).unwrap();
        assert!(t.iter().skip(first_absorbed).all(|p| p == state));
    }

    #[test]
    fn test_same_seed_same_path() {
        let p = params(100, 0.4, 40, 0.001);
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(77);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(77);

        assert_eq!(
            StochasticEngine::simulate_one(&p, &mut rng1),
            StochasticEngine::simulate_one(&p, &mut rng2)
        );
    }

    #[test]
    fn test_seeded_samples_every_generation() {
        let p = params(10, 0.5, 20, 0.0);
        let baseline = DeterministicEngine::simulate(&p);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);

        let t = StochasticEngine::simulate_seeded(&p.sampling(), &baseline, &mut rng);
        assert_eq!(t.len(), baseline.len());
        for value in t.iter() {
            let k = value * 10.0;
            assert!((k - k.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_seeded_does_not_touch_baseline() {
        let p = params(10, 0.2, 10, 0.01);
        let baseline = DeterministicEngine::simulate(&p);
        let before = baseline.clone();
        let model = HybridModel::for_params(&p, &baseline).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);

        for _ in 0..10 {
            model.sample(&mut rng);
        }
        assert_eq!(model.baseline(), &before);
    }

    #[test]
    fn test_hybrid_rejects_mismatched_baseline() {
        let p = params(10, 0.2, 10, 0.01);
        let other = DeterministicEngine::simulate(&params(10, 0.2, 5, 0.01));

        assert!(matches!(
            HybridModel::for_params(&p, &other),
            Err(ShapeError::RowLength { expected: 11, found: 6, .. })
        ));
    }
}
