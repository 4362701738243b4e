//! Error types for the simulation crate.
//!
//! Validation errors are raised at the parameter-set boundary, before any
//! trajectory is computed, so no partial output is ever produced for an
//! invalid input.

use thiserror::Error;

/// A parameter set violates the model's input invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Population size must be at least 1.
    #[error("Invalid population size: {0} (must be at least 1)")]
    PopulationSize(i64),

    /// Initial frequency must lie strictly inside (0, 1).
    #[error("Invalid initial allele frequency: {0} (must be strictly between 0.0 and 1.0)")]
    InitialFrequency(f64),

    /// Generation count must be non-negative.
    #[error("Invalid number of generations: {0} (must be non-negative)")]
    Generations(i64),

    /// Mutation rate must lie in [0, 1).
    #[error("Invalid mutation rate: {0} (must be in [0.0, 1.0))")]
    MutationRate(f64),
}

/// A summary statistic cannot be computed from the available values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatisticError {
    /// Sample standard deviation needs at least two observations.
    #[error("Statistic is undefined for {count} value(s); at least 2 are required")]
    Degenerate { count: usize },

    /// No values at all.
    #[error("Statistic is undefined for an empty sample")]
    Empty,
}

/// Trajectory or matrix data does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A row does not span the expected number of generations.
    #[error("Row {row} has {found} generation values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A frequency lies outside [0, 1] (or is NaN).
    #[error("Allele frequency {value} at generation {generation} is outside [0, 1]")]
    OutOfRange { generation: usize, value: f64 },

    /// Trajectories need at least generation 0; matrices need at least one row.
    #[error("Trajectory or replicate matrix must not be empty")]
    Empty,
}

/// Failure of a single simulation inside a batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    /// The replicate matrix would exceed the configured cell budget.
    #[error("Simulation needs {cells} matrix cells, exceeding the limit of {limit}")]
    ResourceLimit { cells: u128, limit: usize },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors that can occur while building runners and generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// An invalid configuration value was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Errors raised by the tabular storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header.
    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),

    /// The header is present but not laid out as expected.
    #[error("Malformed header: {0}")]
    Header(String),

    /// A data row could not be interpreted.
    #[error("Line {line}: {message}")]
    Record { line: u64, message: String },
}
