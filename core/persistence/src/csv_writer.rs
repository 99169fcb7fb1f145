//! FILENAME: core/persistence/src/csv_writer.rs
//! PURPOSE: Writes a table as delimited text: the header record followed by
//! the canonical text of every row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use tabula_engine::Table;

use crate::{CsvOptions, PersistenceError};

/// Writes `table` to `writer`. A table without columns writes nothing.
pub fn write_csv<W: Write>(table: &Table, writer: W, options: &CsvOptions) -> Result<(), PersistenceError> {
    if table.width() == 0 {
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);

    for record in table.strings() {
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_csv(table: &Table, path: impl AsRef<Path>, options: &CsvOptions) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    write_csv(table, File::create(path)?, options)?;
    info!(target: "csv", "saved {:?}: {} rows x {} columns", path, table.height(), table.width());
    Ok(())
}
