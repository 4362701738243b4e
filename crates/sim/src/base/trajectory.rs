//! Trajectories and replicate matrices.
//!
//! A [`Trajectory`] is the allele frequency at generations `0..=G`. A
//! [`ReplicateMatrix`] stacks independent trajectories of the same length in
//! a single row-major buffer, so every row has the same number of generation
//! columns by construction. Generation indices are carried explicitly by
//! [`ReplicateMatrix::generation_indices`] rather than inferred from labels.

use crate::base::stats;
use crate::errors::ShapeError;
use std::ops::RangeInclusive;

/// Allele frequencies over consecutive generations, each in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    frequencies: Vec<f64>,
}

impl Trajectory {
    /// Wrap values produced by an engine. Engines guarantee the invariants.
    pub(crate) fn from_engine(frequencies: Vec<f64>) -> Self {
        debug_assert!(!frequencies.is_empty());
        debug_assert!(frequencies.iter().all(|p| (0.0..=1.0).contains(p)));
        Self { frequencies }
    }

    /// Number of values (`generations + 1`).
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false; a trajectory holds at least generation 0.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Index of the last generation.
    pub fn generations(&self) -> usize {
        self.frequencies.len() - 1
    }

    /// Frequency at `generation`.
    pub fn get(&self, generation: usize) -> Option<f64> {
        self.frequencies.get(generation).copied()
    }

    /// Frequency at generation 0.
    pub fn initial(&self) -> f64 {
        self.frequencies[0]
    }

    /// Frequency at the last generation.
    pub fn last(&self) -> f64 {
        self.frequencies[self.frequencies.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.frequencies.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.frequencies
    }
}

impl TryFrom<Vec<f64>> for Trajectory {
    type Error = ShapeError;

    fn try_from(frequencies: Vec<f64>) -> Result<Self, Self::Error> {
        if frequencies.is_empty() {
            return Err(ShapeError::Empty);
        }
        if let Some((generation, &value)) = frequencies
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(ShapeError::OutOfRange { generation, value });
        }
        Ok(Self { frequencies })
    }
}

/// Mean and spread of the replicate values at one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub replicates: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` when fewer than two replicates.
    pub std_dev: Option<f64>,
}

impl GenerationStats {
    /// Sample variance, if defined.
    pub fn variance(&self) -> Option<f64> {
        self.std_dev.map(|sd| sd * sd)
    }
}

/// `replicates × (generations + 1)` frequencies, one independent trajectory
/// per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicateMatrix {
    /// Number of generation columns
    width: usize,
    /// Row-major values
    values: Vec<f64>,
}

impl ReplicateMatrix {
    /// Stack trajectories spanning `generations` generations into a matrix.
    ///
    /// # Errors
    /// [`ShapeError::Empty`] when no rows are given,
    /// [`ShapeError::RowLength`] when a row has the wrong length.
    pub fn from_rows<I>(generations: usize, rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = Trajectory>,
    {
        let width = generations + 1;
        let rows = rows.into_iter();
        let mut values = Vec::with_capacity(width * rows.size_hint().0);

        for (row, trajectory) in rows.enumerate() {
            if trajectory.len() != width {
                return Err(ShapeError::RowLength {
                    row,
                    expected: width,
                    found: trajectory.len(),
                });
            }
            values.extend_from_slice(trajectory.as_slice());
        }

        if values.is_empty() {
            return Err(ShapeError::Empty);
        }
        Ok(Self { width, values })
    }

    /// Number of rows.
    pub fn replicates(&self) -> usize {
        self.values.len() / self.width
    }

    /// Index of the last generation column.
    pub fn generations(&self) -> usize {
        self.width - 1
    }

    /// Ordered generation indices of the columns.
    pub fn generation_indices(&self) -> RangeInclusive<usize> {
        0..=self.generations()
    }

    /// One replicate trajectory.
    pub fn row(&self, replicate: usize) -> Option<&[f64]> {
        let start = replicate.checked_mul(self.width)?;
        self.values.get(start..start + self.width)
    }

    /// All replicate trajectories in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.width)
    }

    /// Values of every replicate at `generation`.
    pub fn column(&self, generation: usize) -> Option<Vec<f64>> {
        if generation >= self.width {
            return None;
        }
        Some(self.rows().map(|row| row[generation]).collect())
    }

    /// Mean and sample standard deviation across replicates at `generation`.
    ///
    /// The standard deviation is `None` for a single-replicate matrix rather
    /// than an error, since it reflects the data and not a failure.
    pub fn summarize(&self, generation: usize) -> Option<GenerationStats> {
        let column = self.column(generation)?;
        let mean = stats::mean(&column).ok()?;
        Some(GenerationStats {
            generation,
            replicates: column.len(),
            mean,
            std_dev: stats::sample_std_dev(&column).ok(),
        })
    }

    /// Summaries for every generation in order.
    pub fn summarize_all(&self) -> Vec<GenerationStats> {
        self.generation_indices()
            .filter_map(|generation| self.summarize(generation))
            .collect()
    }

    /// Summary at the last generation.
    pub fn final_stats(&self) -> GenerationStats {
        // A matrix always has at least one row and one column
        let column: Vec<f64> = self.rows().map(|row| row[self.width - 1]).collect();
        GenerationStats {
            generation: self.generations(),
            replicates: column.len(),
            mean: column.iter().sum::<f64>() / column.len() as f64,
            std_dev: stats::sample_std_dev(&column).ok(),
        }
    }
}
