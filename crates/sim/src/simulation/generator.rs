//! Random parameter-set generation.
//!
//! Population sizes are stratified into small, medium and large classes
//! (a third each, remainder to the large class) and shuffled; the other
//! fields are drawn independently per row.

use crate::base::ParameterSet;
use crate::errors::BuilderError;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Half-open integer range `[low, high)` for population sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeClass {
    pub low: i64,
    pub high: i64,
}

impl SizeClass {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }
}

/// Half-open real range `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low < self.high
    }
}

/// Ranges used to generate parameter sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of parameter sets
    pub sample_size: usize,
    /// Seed used by [`ParameterGenerator::generate_seeded`]
    pub seed: u64,
    pub small: SizeClass,
    pub medium: SizeClass,
    pub large: SizeClass,
    pub initial_frequency: UniformRange,
    /// Generation counts to choose from uniformly
    pub generation_choices: Vec<i64>,
    pub selection_coefficient: UniformRange,
    pub mutation_rate: UniformRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            seed: 42,
            small: SizeClass::new(10, 100),
            medium: SizeClass::new(100, 1000),
            large: SizeClass::new(1001, 10_000),
            initial_frequency: UniformRange::new(0.1, 0.9),
            generation_choices: vec![20, 50, 100],
            selection_coefficient: UniformRange::new(0.01, 0.1),
            mutation_rate: UniformRange::new(1e-6, 1e-4),
        }
    }
}

/// Produces random [`ParameterSet`] tables.
#[derive(Debug, Clone)]
pub struct ParameterGenerator {
    config: GeneratorConfig,
}

impl ParameterGenerator {
    /// Create a generator, checking that every range can be sampled and
    /// yields valid parameter sets.
    pub fn new(config: GeneratorConfig) -> Result<Self, BuilderError> {
        for (name, class) in [
            ("small", config.small),
            ("medium", config.medium),
            ("large", config.large),
        ] {
            if class.low < 1 || class.low >= class.high {
                return Err(BuilderError::InvalidParameter(format!(
                    "{name} population class [{}, {}) must be non-empty and start at 1 or above",
                    class.low, class.high
                )));
            }
        }

        let p = config.initial_frequency;
        if !p.is_valid() || p.low <= 0.0 || p.high > 1.0 {
            return Err(BuilderError::InvalidParameter(format!(
                "initial frequency range [{}, {}) must lie inside (0, 1)",
                p.low, p.high
            )));
        }

        let u = config.mutation_rate;
        if !u.is_valid() || u.low < 0.0 || u.high > 1.0 {
            return Err(BuilderError::InvalidParameter(format!(
                "mutation rate range [{}, {}) must lie inside [0, 1)",
                u.low, u.high
            )));
        }

        if !config.selection_coefficient.is_valid() {
            return Err(BuilderError::InvalidParameter(
                "selection coefficient range must be finite and non-empty".into(),
            ));
        }

        if config.generation_choices.is_empty() {
            return Err(BuilderError::InvalidParameter(
                "at least one generation count is required".into(),
            ));
        }
        if let Some(g) = config.generation_choices.iter().find(|&&g| g < 0) {
            return Err(BuilderError::InvalidParameter(format!(
                "generation count {g} must be non-negative"
            )));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `sample_size` parameter sets from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ParameterSet> {
        let c = &self.config;
        let n_small = c.sample_size / 3;
        let n_medium = c.sample_size / 3;
        let n_large = c.sample_size - n_small - n_medium;

        let mut sizes: Vec<i64> = Vec::with_capacity(c.sample_size);
        for (class, count) in [(c.small, n_small), (c.medium, n_medium), (c.large, n_large)] {
            sizes.extend((0..count).map(|_| rng.random_range(class.low..class.high)));
        }
        sizes.shuffle(rng);

        sizes
            .into_iter()
            .map(|population_size| {
                let initial_frequency =
                    rng.random_range(c.initial_frequency.low..c.initial_frequency.high);
                // Validated non-empty in new()
                let generations = c.generation_choices.choose(rng).copied().unwrap_or(0);
                let selection =
                    rng.random_range(c.selection_coefficient.low..c.selection_coefficient.high);
                let mutation_rate = rng.random_range(c.mutation_rate.low..c.mutation_rate.high);

                ParameterSet::new(population_size, initial_frequency, generations, mutation_rate)
                    .with_selection(selection)
            })
            .collect()
    }

    /// Generate from a fresh generator seeded with the configured seed.
    pub fn generate_seeded(&self) -> Vec<ParameterSet> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.config.seed);
        self.generate(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation() {
        let generator = ParameterGenerator::new(GeneratorConfig::default()).unwrap();
        let sets = generator.generate_seeded();

        assert_eq!(sets.len(), 100);
        for set in &sets {
            assert!(set.validate().is_ok(), "{set:?}");
            assert!([20, 50, 100].contains(&set.generations));
            assert!((0.1..0.9).contains(&set.initial_frequency));
            assert!((1e-6..1e-4).contains(&set.mutation_rate));
            let s = set.selection_coefficient.unwrap();
            assert!((0.01..0.1).contains(&s));
        }
    }

    #[test]
    fn test_size_classes_are_stratified() {
        let config = GeneratorConfig {
            sample_size: 10,
            ..GeneratorConfig::default()
        };
        let sets = ParameterGenerator::new(config).unwrap().generate_seeded();

        let small = sets.iter().filter(|s| s.population_size < 100).count();
        let medium = sets
            .iter()
            .filter(|s| (100..1000).contains(&s.population_size))
            .count();
        let large = sets.iter().filter(|s| s.population_size >= 1001).count();

        assert_eq!((small, medium, large), (3, 3, 4));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = ParameterGenerator::new(GeneratorConfig::default()).unwrap();
        assert_eq!(generator.generate_seeded(), generator.generate_seeded());

        let other = ParameterGenerator::new(GeneratorConfig {
            seed: 7,
            ..GeneratorConfig::default()
        })
        .unwrap();
        assert_ne!(generator.generate_seeded(), other.generate_seeded());
    }

    #[test]
    fn test_zero_sample_size() {
        let config = GeneratorConfig {
            sample_size: 0,
            ..GeneratorConfig::default()
        };
        assert!(ParameterGenerator::new(config)
            .unwrap()
            .generate_seeded()
            .is_empty());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let bad = [
            GeneratorConfig {
                small: SizeClass::new(0, 10),
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                medium: SizeClass::new(100, 100),
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                initial_frequency: UniformRange::new(0.0, 0.5),
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                mutation_rate: UniformRange::new(0.5, 1.5),
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                generation_choices: Vec::new(),
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                generation_choices: vec![10, -1],
                ..GeneratorConfig::default()
            },
        ];

        for config in bad {
            assert!(ParameterGenerator::new(config).is_err());
        }
    }
}
