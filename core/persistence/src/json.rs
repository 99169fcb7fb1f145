//! FILENAME: core/persistence/src/json.rs
//! PURPOSE: JSON export and import of a table through `SavedTable`.
//! CONTEXT: The document has the fields `header`, `types` (kind tags 1-5)
//! and `body` (row-major cells).

use std::fs;
use std::path::Path;

use log::{info, warn};
use tabula_engine::{Table, TimeProfiles};

use crate::{PersistenceError, SavedTable};

#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
    /// Profiles tried, in order, on timestamp cells during import.
    pub profiles: TimeProfiles,
    /// Indent the output.
    pub pretty: bool,
}

pub fn to_json(table: &Table, options: &JsonOptions) -> Result<String, PersistenceError> {
    let saved = SavedTable::from_table(table)?;
    let text = if options.pretty {
        serde_json::to_string_pretty(&saved)?
    } else {
        serde_json::to_string(&saved)?
    };
    Ok(text)
}

/// Parses a document produced by `to_json`. Nothing is returned unless every
/// cell decodes to its column kind.
pub fn from_json(text: &str, options: &JsonOptions) -> Result<Table, PersistenceError> {
    let saved: SavedTable = serde_json::from_str(text)?;
    saved.to_table(&options.profiles).map_err(|e| {
        warn!(target: "json", "rejected document: {}", e);
        e
    })
}

pub fn load_json(path: impl AsRef<Path>, options: &JsonOptions) -> Result<Table, PersistenceError> {
    let path = path.as_ref();
    let table = from_json(&fs::read_to_string(path)?, options)?;
    info!(target: "json", "loaded {:?}: {} rows x {} columns", path, table.height(), table.width());
    Ok(table)
}

pub fn save_json(table: &Table, path: impl AsRef<Path>, options: &JsonOptions) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    fs::write(path, to_json(table, options)?)?;
    info!(target: "json", "saved {:?}: {} rows x {} columns", path, table.height(), table.width());
    Ok(())
}
