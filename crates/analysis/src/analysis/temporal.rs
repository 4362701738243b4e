//! Temporal analysis
//!
//! Per-generation statistics across the replicates of one ensemble.

use allelic_sim::base::{stats, ReplicateMatrix};

/// Mean allele frequency at every generation.
pub fn mean_trajectory(matrix: &ReplicateMatrix) -> Vec<f64> {
    matrix.summarize_all().into_iter().map(|s| s.mean).collect()
}

/// Sample variance (N − 1 denominator) at every generation.
///
/// Entries are `None` when the matrix has a single replicate.
pub fn variance_trajectory(matrix: &ReplicateMatrix) -> Vec<Option<f64>> {
    matrix
        .generation_indices()
        .map(|generation| {
            matrix
                .column(generation)
                .and_then(|column| stats::sample_variance(&column).ok())
        })
        .collect()
}

/// Expected Wright-Fisher variance after `generations` of pure drift:
/// `p0 (1 − p0) (1 − (1 − 1/N)^t)`.
pub fn expected_drift_variance(population_size: u64, initial_frequency: f64, generations: usize) -> f64 {
    let retained = (1.0 - 1.0 / population_size as f64).powf(generations as f64);
    initial_frequency * (1.0 - initial_frequency) * (1.0 - retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use allelic_sim::base::Trajectory;

    fn matrix(rows: &[&[f64]]) -> ReplicateMatrix {
        let rows = rows
            .iter()
            .map(|r| Trajectory::try_from(r.to_vec()).unwrap());
        ReplicateMatrix::from_rows(2, rows).unwrap()
    }

    #[test]
    fn test_mean_trajectory() {
        let m = matrix(&[&[0.5, 0.4, 0.2], &[0.5, 0.6, 0.8]]);
        assert_eq!(mean_trajectory(&m), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_variance_trajectory() {
        let m = matrix(&[&[0.5, 0.4, 0.2], &[0.5, 0.6, 0.8]]);
        let v = variance_trajectory(&m);

        assert_eq!(v[0], Some(0.0));
        assert!((v[1].unwrap() - 0.02).abs() < 1e-12);
        assert!((v[2].unwrap() - 0.18).abs() < 1e-12);
    }

    #[test]
    fn test_variance_single_replicate() {
        let m = matrix(&[&[0.5, 0.4, 0.2]]);
        assert_eq!(variance_trajectory(&m), vec![None, None, None]);
    }

    #[test]
    fn test_expected_drift_variance() {
        assert_eq!(expected_drift_variance(100, 0.5, 0), 0.0);
        let v = expected_drift_variance(100, 0.5, 20);
        assert!((v - 0.25 * (1.0 - 0.99_f64.powi(20))).abs() < 1e-12);
        // N = 1 fixes or loses in one generation
        assert!((expected_drift_variance(1, 0.3, 1) - 0.21).abs() < 1e-12);
    }
}
