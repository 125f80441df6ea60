// CSV front door: bytes in, typed Dataset out.

use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::data::{Dataset, Value};
use crate::error::{ChartError, Result};

/// Read a headered CSV from stdin.
pub fn read_from_stdin() -> Result<Dataset> {
    parse_csv(io::stdin().lock())
}

/// Read a headered CSV from a file path.
pub fn read_from_path(path: &Path) -> Result<Dataset> {
    let reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    parse_records(reader)
}

/// Parse headered CSV from any reader.
///
/// Fields are dynamically typed (numeric-looking fields become numbers),
/// blank lines are skipped, and every row is padded or truncated to the
/// header width so downstream indexing never goes out of bounds.
pub fn parse_csv<R: Read>(input: R) -> Result<Dataset> {
    let reader = ReaderBuilder::new().flexible(true).from_reader(input);
    parse_records(reader)
}

fn parse_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(ChartError::Schema("CSV has no header row".into()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        // A lone empty field is a blank-ish line, not data.
        if record.len() <= 1 && record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let mut row = Vec::with_capacity(headers.len());
        for i in 0..headers.len() {
            let raw = record.get(i).unwrap_or("");
            row.push(Value::parse(raw));
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    Ok(Dataset::new(headers, rows))
}
