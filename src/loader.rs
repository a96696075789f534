use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ImportError, Result};
use crate::models::{ObservationRecord, PatientRecord};

/// Load the patient demographics file, skipping its single header row.
pub fn load_patients(path: &Path) -> Result<Vec<PatientRecord>> {
    read_rows(path, 5)
}

/// Load the viral-load observation file, skipping its single header row.
pub fn load_observations(path: &Path) -> Result<Vec<ObservationRecord>> {
    read_rows(path, 3)
}

/// Read every data row of a CSV file into typed records, positionally.
/// Column names in the header are ignored; only column order matters.
fn read_rows<T: DeserializeOwned>(path: &Path, columns: usize) -> Result<Vec<T>> {
    let display = path.display().to_string();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| ImportError::FileRead {
            path: display.clone(),
            source,
        })?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Line 1 is the header, so data row N sits on line N + 1.
        let line = index + 2;

        let record = record.map_err(|err| ImportError::MalformedRow {
            path: display.clone(),
            line,
            message: err.to_string(),
        })?;

        if record.len() != columns {
            return Err(ImportError::MalformedRow {
                path: display.clone(),
                line,
                message: format!("expected {} columns, found {}", columns, record.len()),
            });
        }

        let row = record
            .deserialize(None)
            .map_err(|err| ImportError::MalformedRow {
                path: display.clone(),
                line,
                message: err.to_string(),
            })?;

        rows.push(row);
    }

    Ok(rows)
}
