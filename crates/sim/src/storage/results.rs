//! Wide result tables.
//!
//! One row per replicate trajectory:
//!
//! ```text
//! Simulation_ID,Population_Size,Initial_Allele_Frequency,Generations,Mutation_Rate[,Selection_Coefficient],Generation_0,...,Generation_G
//! ```
//!
//! `G` is the largest generation count in the table; rows of shorter
//! simulations leave their trailing generation cells empty. Generation
//! labels only exist here; in memory the columns are indexed.

use crate::base::{ParameterSet, ReplicateMatrix, Trajectory};
use crate::errors::StorageError;
use crate::simulation::SimulationRecord;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Prefix of every generation column label.
pub const GENERATION_PREFIX: &str = "Generation_";

const SIMULATION_ID: &str = "Simulation_ID";
const POPULATION_SIZE: &str = "Population_Size";
const INITIAL_FREQUENCY: &str = "Initial_Allele_Frequency";
const GENERATIONS: &str = "Generations";
const MUTATION_RATE: &str = "Mutation_Rate";
const SELECTION_COEFFICIENT: &str = "Selection_Coefficient";

/// Column label for `generation`.
pub fn generation_label(generation: usize) -> String {
    format!("{GENERATION_PREFIX}{generation}")
}

/// One simulation rebuilt from a result table.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSimulation {
    pub simulation_id: usize,
    pub parameters: ParameterSet,
    pub matrix: ReplicateMatrix,
}

/// Write records as a wide CSV file.
pub fn write_results(
    path: impl AsRef<Path>,
    records: &[SimulationRecord],
) -> Result<(), StorageError> {
    let writer = csv::Writer::from_path(path)?;
    write_all(writer, records)
}

/// Write records as wide CSV to any writer.
pub fn write_results_to<W: io::Write>(
    writer: W,
    records: &[SimulationRecord],
) -> Result<(), StorageError> {
    write_all(csv::Writer::from_writer(writer), records)
}

fn write_all<W: io::Write>(
    mut writer: csv::Writer<W>,
    records: &[SimulationRecord],
) -> Result<(), StorageError> {
    let with_selection = records
        .iter()
        .any(|r| r.parameters.selection_coefficient.is_some());
    let width = records
        .iter()
        .map(|r| r.generations() + 1)
        .max()
        .unwrap_or(0);

    let mut header: Vec<String> = [
        SIMULATION_ID,
        POPULATION_SIZE,
        INITIAL_FREQUENCY,
        GENERATIONS,
        MUTATION_RATE,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if with_selection {
        header.push(SELECTION_COEFFICIENT.to_string());
    }
    header.extend((0..width).map(generation_label));
    writer.write_record(&header)?;

    let mut row: Vec<String> = Vec::with_capacity(header.len());
    for record in records {
        let p = &record.parameters;
        for values in record.matrix.rows() {
            row.clear();
            row.push(record.simulation_id.to_string());
            row.push(p.population_size.to_string());
            row.push(p.initial_frequency.to_string());
            row.push(p.generations.to_string());
            row.push(p.mutation_rate.to_string());
            if with_selection {
                row.push(
                    p.selection_coefficient
                        .map(|s| s.to_string())
                        .unwrap_or_default(),
                );
            }
            row.extend(values.iter().map(f64::to_string));
            row.resize(header.len(), String::new());
            writer.write_record(&row)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Column positions of a result table, parsed once from its header.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResultLayout {
    simulation_id: usize,
    population_size: usize,
    initial_frequency: usize,
    generations: usize,
    mutation_rate: usize,
    selection: Option<usize>,
    /// Position of `Generation_0`
    first_generation: usize,
    /// Number of generation columns
    generation_count: usize,
}

impl ResultLayout {
    fn from_header(header: &csv::StringRecord) -> Result<Self, StorageError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or(StorageError::MissingColumn(name))
        };

        let generation_columns: Vec<usize> = header
            .iter()
            .enumerate()
            .filter(|(_, h)| h.starts_with(GENERATION_PREFIX))
            .map(|(i, _)| i)
            .collect();
        let first_generation = generation_columns.first().copied().unwrap_or(header.len());

        for (generation, &column) in generation_columns.iter().enumerate() {
            if column != first_generation + generation || header[column] != generation_label(generation) {
                return Err(StorageError::Header(format!(
                    "expected column {} to be '{}', found '{}'",
                    first_generation + generation,
                    generation_label(generation),
                    header.get(first_generation + generation).unwrap_or("")
                )));
            }
        }

        Ok(Self {
            simulation_id: find(SIMULATION_ID)?,
            population_size: find(POPULATION_SIZE)?,
            initial_frequency: find(INITIAL_FREQUENCY)?,
            generations: find(GENERATIONS)?,
            mutation_rate: find(MUTATION_RATE)?,
            selection: find(SELECTION_COEFFICIENT).ok(),
            first_generation,
            generation_count: generation_columns.len(),
        })
    }
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    column: usize,
    name: &str,
    line: u64,
) -> Result<T, StorageError> {
    let raw = record.get(column).unwrap_or("");
    raw.parse().map_err(|_| StorageError::Record {
        line,
        message: format!("cannot parse {name} value '{raw}'"),
    })
}

struct Group {
    parameters: ParameterSet,
    generations: usize,
    rows: Vec<Trajectory>,
}

/// Read a wide result table and rebuild one matrix per simulation.
///
/// Simulations are returned in ascending `Simulation_ID` order.
pub fn read_results(path: impl AsRef<Path>) -> Result<Vec<StoredSimulation>, StorageError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_all(reader)
}

/// Read a wide result table from any reader.
pub fn read_results_from<R: io::Read>(reader: R) -> Result<Vec<StoredSimulation>, StorageError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_all(reader)
}

fn read_all<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<StoredSimulation>, StorageError> {
    let layout = ResultLayout::from_header(reader.headers()?)?;
    let mut groups: BTreeMap<usize, Group> = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let simulation_id: usize = parse_field(&record, layout.simulation_id, SIMULATION_ID, line)?;
        let selection_coefficient = match layout.selection {
            Some(column) if !record.get(column).unwrap_or("").is_empty() => {
                Some(parse_field(&record, column, SELECTION_COEFFICIENT, line)?)
            }
            _ => None,
        };
        let parameters = ParameterSet {
            population_size: parse_field(&record, layout.population_size, POPULATION_SIZE, line)?,
            initial_frequency: parse_field(
                &record,
                layout.initial_frequency,
                INITIAL_FREQUENCY,
                line,
            )?,
            generations: parse_field(&record, layout.generations, GENERATIONS, line)?,
            selection_coefficient,
            mutation_rate: parse_field(&record, layout.mutation_rate, MUTATION_RATE, line)?,
        };

        let generations = usize::try_from(parameters.generations)
            .ok()
            .filter(|&g| g < layout.generation_count)
            .ok_or_else(|| StorageError::Record {
                line,
                message: format!(
                    "Generations = {} does not fit the {} generation columns",
                    parameters.generations, layout.generation_count
                ),
            })?;

        let start = layout.first_generation;
        let values = (start..=start + generations)
            .map(|column| parse_field::<f64>(&record, column, "generation", line))
            .collect::<Result<Vec<f64>, _>>()?;
        let trailing = (start + generations + 1..start + layout.generation_count)
            .any(|column| !record.get(column).unwrap_or("").is_empty());
        if trailing {
            return Err(StorageError::Record {
                line,
                message: format!("values beyond generation {generations}"),
            });
        }
        let trajectory = Trajectory::try_from(values).map_err(|e| StorageError::Record {
            line,
            message: e.to_string(),
        })?;

        let group = groups.entry(simulation_id).or_insert_with(|| Group {
            parameters: parameters.clone(),
            generations,
            rows: Vec::new(),
        });
        if group.parameters != parameters {
            return Err(StorageError::Record {
                line,
                message: format!("parameters differ from earlier rows of simulation {simulation_id}"),
            });
        }
        group.rows.push(trajectory);
    }

    groups
        .into_iter()
        .map(|(simulation_id, group)| {
            let matrix = ReplicateMatrix::from_rows(group.generations, group.rows).map_err(|e| {
                StorageError::Record {
                    line: 0,
                    message: format!("simulation {simulation_id}: {e}"),
                }
            })?;
            Ok(StoredSimulation {
                simulation_id,
                parameters: group.parameters,
                matrix,
            })
        })
        .collect()
}
