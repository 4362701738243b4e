//! Per-simulation summary tables.

use super::temporal::mean_trajectory;
use super::SimulationView;
use allelic_sim::errors::StorageError;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Final-generation statistics for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    #[serde(rename = "Simulation_ID")]
    pub simulation_id: usize,
    #[serde(rename = "Population_Size")]
    pub population_size: i64,
    #[serde(rename = "Initial_Allele_Frequency")]
    pub initial_frequency: f64,
    #[serde(rename = "Generations")]
    pub generations: i64,
    #[serde(rename = "Mutation_Rate")]
    pub mutation_rate: f64,
    #[serde(rename = "Replicates")]
    pub replicates: usize,
    #[serde(rename = "Final_Mean_Allele_Frequency")]
    pub final_mean: f64,
    /// `None` for single-replicate simulations
    #[serde(rename = "Final_Std_Allele_Frequency")]
    pub final_std: Option<f64>,
    /// Mean frequency at every generation
    #[serde(skip)]
    pub mean_trajectory: Vec<f64>,
}

/// Summarise one simulation.
pub fn summarize_one(view: SimulationView<'_>) -> SimulationSummary {
    let stats = view.matrix.final_stats();
    SimulationSummary {
        simulation_id: view.simulation_id,
        population_size: view.parameters.population_size,
        initial_frequency: view.parameters.initial_frequency,
        generations: view.parameters.generations,
        mutation_rate: view.parameters.mutation_rate,
        replicates: stats.replicates,
        final_mean: stats.mean,
        final_std: stats.std_dev,
        mean_trajectory: mean_trajectory(view.matrix),
    }
}

/// Summarise records from a run report or a stored result table.
///
/// # Examples
///
/// ```
/// use allelic_analysis::summarize;
/// use allelic_sim::base::ParameterSet;
/// use allelic_sim::simulation::{SimulationMode, SimulationRunner};
///
/// let report = SimulationRunner::builder()
///     .mode(SimulationMode::Deterministic)
///     .build()
///     .unwrap()
///     .run_all(&[ParameterSet::new(100, 0.2, 10, 0.01)]);
///
/// let summaries = summarize(&report.records);
/// assert_eq!(summaries[0].replicates, 1);
/// assert!(summaries[0].final_std.is_none());
/// ```
pub fn summarize<'a, I>(simulations: I) -> Vec<SimulationSummary>
where
    I: IntoIterator,
    I::Item: Into<SimulationView<'a>>,
{
    simulations
        .into_iter()
        .map(|s| summarize_one(s.into()))
        .collect()
}

/// Write summaries as a CSV file.
pub fn write_summary(
    path: impl AsRef<Path>,
    summaries: &[SimulationSummary],
) -> Result<(), StorageError> {
    let writer = csv::Writer::from_path(path)?;
    write_all(writer, summaries)
}

/// Write summaries as CSV to any writer.
pub fn write_summary_to<W: io::Write>(
    writer: W,
    summaries: &[SimulationSummary],
) -> Result<(), StorageError> {
    write_all(csv::Writer::from_writer(writer), summaries)
}

fn write_all<W: io::Write>(
    mut writer: csv::Writer<W>,
    summaries: &[SimulationSummary],
) -> Result<(), StorageError> {
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;
    Ok(())
}
