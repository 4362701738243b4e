//! Noise-free allele-frequency trajectories.

use crate::base::{ModelParams, Trajectory};
use crate::errors::ParameterError;

/// Mutation-only recurrence without drift.
///
/// Population size is accepted for symmetry with the stochastic engine but
/// does not influence the result. The output is a pure function of the
/// inputs and consumes no randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicEngine;

impl DeterministicEngine {
    /// Compute `generations + 1` frequencies starting at `p0`.
    pub fn simulate(params: &ModelParams) -> Trajectory {
        let mutation = params.mutation();
        let mut frequencies = Vec::with_capacity(params.trajectory_len());

        let mut p = params.initial_frequency();
        frequencies.push(p);
        for _ in 0..params.generations() {
            p = mutation.apply(p);
            frequencies.push(p);
        }

        Trajectory::from_engine(frequencies)
    }
}

/// Validate raw inputs and compute a deterministic trajectory.
///
/// # Errors
/// Returns the first violated parameter invariant.
pub fn deterministic_trajectory(
    population_size: u64,
    initial_frequency: f64,
    generations: usize,
    mutation_rate: f64,
) -> Result<Trajectory, ParameterError> {
    let params = ModelParams::new(population_size, initial_frequency, generations, mutation_rate)?;
    Ok(DeterministicEngine::simulate(&params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_start() {
        let t = deterministic_trajectory(100, 0.2, 10, 0.01).unwrap();
        assert_eq!(t.len(), 11);
        assert_eq!(t.initial(), 0.2);
    }

    #[test]
    fn test_zero_generations() {
        let t = deterministic_trajectory(5, 0.7, 0, 0.2).unwrap();
        assert_eq!(t.as_slice(), &[0.7]);
    }

    #[test]
    fn test_matches_closed_form() {
        let params = ModelParams::new(100, 0.2, 10, 0.01).unwrap();
        let t = DeterministicEngine::simulate(&params);
        let expected = params.mutation().expected_after(0.2, 10);

        assert!((t.last() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_population_size_is_irrelevant() {
        let small = deterministic_trajectory(1, 0.3, 30, 0.02).unwrap();
        let large = deterministic_trajectory(1_000_000, 0.3, 30, 0.02).unwrap();
        assert_eq!(small, large);
    }

    #[test]
    fn test_no_mutation_is_constant() {
        let t = deterministic_trajectory(10, 0.35, 15, 0.0).unwrap();
        assert!(t.iter().all(|p| p == 0.35));
    }

    #[test]
    fn test_monotone_convergence_toward_half() {
        let t = deterministic_trajectory(10, 0.1, 200, 0.05).unwrap();

        for pair in t.as_slice().windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!(pair[1] <= 0.5);
        }
        assert!((t.last() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(deterministic_trajectory(0, 0.5, 10, 0.0).is_err());
        assert!(deterministic_trajectory(10, 1.0, 10, 0.0).is_err());
        assert!(deterministic_trajectory(10, 0.5, 10, 1.0).is_err());
    }
}
