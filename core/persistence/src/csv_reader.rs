//! FILENAME: core/persistence/src/csv_reader.rs
//! PURPOSE: Reads delimited text into a table. The first record is the
//! header; every later field is inferred with `Value::parse_text`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use tabula_engine::{Header, Row, Table, Value};

use crate::{CsvOptions, PersistenceError};

/// Reads a table from `reader`. Empty input yields an empty table.
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<Table, PersistenceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Header = csv_reader.headers()?.iter().collect();
    let mut table = Table::new(header);

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let row: Row = record
            .iter()
            .map(|field| Value::parse_text(field, &options.profiles))
            .collect();

        table.append_row(row).map_err(|source| {
            warn!(target: "csv", "rejected record at line {}: {}", line, source);
            PersistenceError::Row { line, source }
        })?;
    }

    Ok(table)
}

pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table, PersistenceError> {
    let path = path.as_ref();
    let table = read_csv(File::open(path)?, options)?;
    info!(target: "csv", "loaded {:?}: {} rows x {} columns", path, table.height(), table.width());
    Ok(table)
}
