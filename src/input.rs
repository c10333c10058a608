//! Process files: a JSON array of objects, or CSV with a header row.

use std::{fs, io::Read, path::Path};

use crate::{core::Process, error::InputError, sim::ProcessSpec};

pub fn load_specs(path: &Path) -> Result<Vec<ProcessSpec>, InputError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let read = || {
        fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    match ext.as_str() {
        "json" => parse_json(&read()?),
        "csv" => parse_csv(read()?.as_bytes()),
        _ => Err(InputError::UnsupportedFormat(ext)),
    }
}

/// Loads and validates; fails on the first bad descriptor.
pub fn load_processes(path: &Path) -> Result<Vec<Process>, InputError> {
    let specs = load_specs(path)?;
    specs
        .iter()
        .map(|spec| spec.validate().map_err(InputError::from))
        .collect()
}

pub fn parse_json(text: &str) -> Result<Vec<ProcessSpec>, InputError> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ProcessSpec>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let specs = reader
        .deserialize::<ProcessSpec>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(specs)
}
