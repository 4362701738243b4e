//! Parameter tables.

use crate::base::ParameterSet;
use crate::errors::StorageError;
use std::io;
use std::path::Path;

/// Read a parameter table from a CSV file.
///
/// Columns are matched by header name, so their order is free.
/// `Selection_Coefficient` may be absent or left empty.
pub fn read_parameters(path: impl AsRef<Path>) -> Result<Vec<ParameterSet>, StorageError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    collect(reader)
}

/// Read a parameter table from any reader.
pub fn read_parameters_from<R: io::Read>(reader: R) -> Result<Vec<ParameterSet>, StorageError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    collect(reader)
}

fn collect<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<ParameterSet>, StorageError> {
    let mut sets = Vec::new();
    for result in reader.deserialize() {
        sets.push(result?);
    }
    Ok(sets)
}

/// Write a parameter table to a CSV file.
pub fn write_parameters(path: impl AsRef<Path>, sets: &[ParameterSet]) -> Result<(), StorageError> {
    let writer = csv::Writer::from_path(path)?;
    write_all(writer, sets)
}

/// Write a parameter table to any writer.
pub fn write_parameters_to<W: io::Write>(
    writer: W,
    sets: &[ParameterSet],
) -> Result<(), StorageError> {
    write_all(csv::Writer::from_writer(writer), sets)
}

fn write_all<W: io::Write>(
    mut writer: csv::Writer<W>,
    sets: &[ParameterSet],
) -> Result<(), StorageError> {
    for set in sets {
        writer.serialize(set)?;
    }
    writer.flush()?;
    Ok(())
}
