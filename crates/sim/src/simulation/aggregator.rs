//! Monte Carlo replication.
//!
//! The aggregator draws one 64-bit seed per replicate from the caller's
//! generator, in replicate order, and gives every replicate its own
//! `Xoshiro256PlusPlus`. Replicates therefore share no random state, can run
//! on any number of threads, and produce bit-identical matrices for the same
//! seed whether or not parallelism is enabled.

use crate::base::{ReplicateMatrix, Trajectory};
use crate::errors::ShapeError;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// A source of independent replicate trajectories for one parameter set.
pub trait ReplicateModel: Sync {
    /// Index of the last generation of every produced trajectory.
    fn generations(&self) -> usize;

    /// Produce one replicate using only `rng` for randomness.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory;
}

/// Runs replicates of a [`ReplicateModel`] and stacks them into a matrix.
#[derive(Debug, Clone, Copy)]
pub struct ReplicateAggregator {
    parallel: bool,
}

impl Default for ReplicateAggregator {
    fn default() -> Self {
        Self::parallel()
    }
}

impl ReplicateAggregator {
    /// Aggregator that spreads replicates over the rayon thread pool.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Aggregator that computes replicates one after another.
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Run `replicates` independent replicates of `model`.
    ///
    /// # Errors
    /// Returns [`ShapeError::Empty`] when `replicates` is zero.
    pub fn run<M, R>(
        &self,
        model: &M,
        replicates: usize,
        rng: &mut R,
    ) -> Result<ReplicateMatrix, ShapeError>
    where
        M: ReplicateModel,
        R: Rng + ?Sized,
    {
        // Seeds are drawn up front so the draw order never depends on scheduling
        let seeds: Vec<u64> = (0..replicates).map(|_| rng.random()).collect();

        let sample = |&seed: &u64| {
            let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            model.sample(&mut local_rng)
        };

        let rows: Vec<Trajectory> = if self.parallel {
            seeds.par_iter().map(sample).collect()
        } else {
            seeds.iter().map(sample).collect()
        };

        ReplicateMatrix::from_rows(model.generations(), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::ModelParams;
    use crate::simulation::{DeterministicEngine, HybridModel, WrightFisherModel};

    fn wf(n: u64, p0: f64, generations: usize, u: f64) -> WrightFisherModel {
        WrightFisherModel::new(ModelParams::new(n, p0, generations, u).unwrap())
    }

    #[test]
    fn test_matrix_shape() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let matrix = ReplicateAggregator::sequential()
            .run(&wf(50, 0.5, 20, 0.0), 30, &mut rng)
            .unwrap();

        assert_eq!(matrix.replicates(), 30);
        assert_eq!(matrix.generations(), 20);
        assert!(matrix.rows().all(|row| row.len() == 21));
    }

    #[test]
    fn test_zero_replicates_is_an_error() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let result = ReplicateAggregator::sequential().run(&wf(50, 0.5, 5, 0.0), 0, &mut rng);
        assert_eq!(result, Err(ShapeError::Empty));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let model = wf(100, 0.3, 25, 0.001);
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(2024);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(2024);

        let seq = ReplicateAggregator::sequential()
            .run(&model, 64, &mut rng1)
            .unwrap();
        let par = ReplicateAggregator::parallel()
            .run(&model, 64, &mut rng2)
            .unwrap();

        assert_eq!(seq, par);
    }

    #[test]
    fn test_replicates_are_independent() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let matrix = ReplicateAggregator::parallel()
            .run(&wf(1000, 0.5, 10, 0.0), 5, &mut rng)
            .unwrap();

        let first = matrix.row(0).unwrap();
        assert!(matrix.rows().skip(1).any(|row| row != first));
    }

    #[test]
    fn test_prefix_stable_in_replicate_count() {
        let model = wf(30, 0.5, 10, 0.0);
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(5);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(5);

        let small = ReplicateAggregator::sequential()
            .run(&model, 3, &mut rng1)
            .unwrap();
        let large = ReplicateAggregator::sequential()
            .run(&model, 10, &mut rng2)
            .unwrap();

        for i in 0..3 {
            assert_eq!(small.row(i), large.row(i));
        }
    }

    #[test]
    fn test_hybrid_mean_tracks_baseline() {
        let params = ModelParams::new(200, 0.2, 30, 0.02).unwrap();
        let baseline = DeterministicEngine::simulate(&params);
        let model = HybridModel::for_params(&params, &baseline).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(31);

        let matrix = ReplicateAggregator::parallel()
            .run(&model, 2000, &mut rng)
            .unwrap();

        for stats in matrix.summarize_all() {
            let expected = baseline.get(stats.generation).unwrap();
            assert!(
                (stats.mean - expected).abs() < 0.01,
                "generation {}: {} vs {}",
                stats.generation,
                stats.mean,
                expected
            );
        }
    }
}
