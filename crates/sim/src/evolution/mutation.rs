//! Symmetric two-allele mutation.
//!
//! Each generation a fraction `u` of the focal allele mutates to the
//! alternate allele and the same fraction of the alternate allele mutates
//! back, giving the linear map
//!
//! ```text
//! p' = (1 − u)·p + u·(1 − p)
//! ```
//!
//! The map is a contraction toward the equilibrium frequency 0.5 for any
//! `u ∈ (0, 1)`, and after `t` generations it has the closed form
//! `p_t = 0.5 + (p_0 − 0.5)(1 − 2u)^t`.

use crate::errors::ParameterError;

/// Frequency toward which mutation drives every trajectory.
pub const EQUILIBRIUM_FREQUENCY: f64 = 0.5;

/// Symmetric per-generation mutation with rate `u ∈ [0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricMutation {
    rate: f64,
}

impl SymmetricMutation {
    /// Create a mutation step.
    ///
    /// # Errors
    /// Returns [`ParameterError::MutationRate`] if `rate` is outside `[0, 1)`.
    pub fn new(rate: f64) -> Result<Self, ParameterError> {
        if !(0.0..1.0).contains(&rate) {
            return Err(ParameterError::MutationRate(rate));
        }
        Ok(Self { rate })
    }

    pub(crate) fn from_validated(rate: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&rate));
        Self { rate }
    }

    /// Per-generation mutation rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Apply one generation of mutation to frequency `p`.
    ///
    /// The result is clamped to `[0, 1]` so rounding can never leave the
    /// valid range.
    #[inline]
    pub fn apply(&self, p: f64) -> f64 {
        let u = self.rate;
        ((1.0 - u) * p + u * (1.0 - p)).clamp(0.0, 1.0)
    }

    /// Closed-form frequency after `generations` steps from `p0`.
    pub fn expected_after(&self, p0: f64, generations: usize) -> f64 {
        EQUILIBRIUM_FREQUENCY
            + (p0 - EQUILIBRIUM_FREQUENCY) * (1.0 - 2.0 * self.rate).powf(generations as f64)
    }
}
