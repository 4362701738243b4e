//! Sample statistics shared by the aggregator and analysis code.

use crate::errors::StatisticError;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, StatisticError> {
    if values.is_empty() {
        return Err(StatisticError::Empty);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased sample variance (N − 1 denominator).
pub fn sample_variance(values: &[f64]) -> Result<f64, StatisticError> {
    if values.len() < 2 {
        return Err(StatisticError::Degenerate {
            count: values.len(),
        });
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation (square root of [`sample_variance`]).
pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatisticError> {
    sample_variance(values).map(f64::sqrt)
}
