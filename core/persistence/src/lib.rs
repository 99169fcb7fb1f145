//! FILENAME: core/persistence/src/lib.rs
//! Tabula Persistence Module
//!
//! Reads and writes tables as CSV and JSON, and renders them as aligned text.
//! Everything here goes through the public table API; the engine knows
//! nothing about these formats.

mod csv_reader;
mod csv_writer;
mod error;
mod json;
mod text;

pub use csv_reader::{load_csv, read_csv};
pub use csv_writer::{save_csv, write_csv};
pub use error::PersistenceError;
pub use json::{from_json, load_json, save_json, to_json, JsonOptions};
pub use text::{render, Decorations, Delimiters, Rule};

use serde::{Deserialize, Serialize};
use tabula_engine::{Header, Kind, Row, Table, TableError, TimeProfiles, Value};

// ============================================================================
// CSV OPTIONS
// ============================================================================

/// Settings shared by the CSV reader and writer.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field separator.
    pub delimiter: u8,
    /// Profiles tried, in order, on cells that look like timestamps.
    pub profiles: TimeProfiles,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            profiles: TimeProfiles::default(),
        }
    }
}

// ============================================================================
// SAVED TABLE
// ============================================================================

/// Serializable form of a table: the header, one kind tag per column and the
/// flattened row-major body. Timestamps are written in the canonical profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTable {
    pub header: Header,
    #[serde(default)]
    pub types: Vec<Kind>,
    #[serde(default)]
    pub body: Vec<serde_json::Value>,
}

impl SavedTable {
    pub fn from_table(table: &Table) -> Result<Self, PersistenceError> {
        let body = table
            .rows()
            .flatten()
            .map(encode_cell)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            header: table.header().clone(),
            types: table.types().to_vec(),
            body,
        })
    }

    /// Rebuilds the table. When `types` is absent the kinds are classified
    /// from the first row.
    pub fn to_table(&self, profiles: &TimeProfiles) -> Result<Table, PersistenceError> {
        let n = self.header.len();
        if n == 0 {
            if !self.body.is_empty() {
                return Err(PersistenceError::InvalidFormat(format!(
                    "body holds {} values but the header is empty",
                    self.body.len()
                )));
            }
            return Ok(Table::new(self.header.clone()));
        }

        if self.body.len() % n != 0 {
            return Err(PersistenceError::InvalidFormat(format!(
                "body length {} is not a multiple of header length {}",
                self.body.len(),
                n
            )));
        }
        if !self.types.is_empty() && self.types.len() != n {
            return Err(PersistenceError::InvalidFormat(format!(
                "{} types for {} columns",
                self.types.len(),
                n
            )));
        }
        if self.body.is_empty() {
            return Ok(Table::new(self.header.clone()));
        }

        let types = if self.types.is_empty() {
            self.body[..n].iter().map(classify).collect::<Result<Vec<_>, _>>()?
        } else {
            self.types.clone()
        };

        let rows = self
            .body
            .chunks(n)
            .map(|cells| {
                cells
                    .iter()
                    .zip(&types)
                    .map(|(cell, &kind)| decode_cell(kind, cell, profiles))
                    .collect::<Result<Row, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table::with_rows(self.header.clone(), rows)?)
    }
}

fn encode_cell(value: &Value) -> Result<serde_json::Value, PersistenceError> {
    Ok(match value {
        Value::Integer(n) => serde_json::Value::from(*n),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .ok_or_else(|| PersistenceError::InvalidFormat(format!("float {} has no JSON form", x)))?,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Timestamp(ts) => serde_json::Value::String(ts.to_canonical_text()),
        Value::String(s) => serde_json::Value::String(s.clone()),
    })
}

fn decode_cell(kind: Kind, cell: &serde_json::Value, profiles: &TimeProfiles) -> Result<Value, TableError> {
    let decoded = match kind {
        Kind::Integer => cell.as_i64().map(Value::Integer),
        Kind::Float => cell.as_f64().map(Value::Float),
        Kind::Boolean => cell.as_bool().map(Value::Boolean),
        Kind::Timestamp => match cell.as_str() {
            Some(s) => return profiles.parse(s).map(Value::Timestamp),
            None => None,
        },
        Kind::String => cell.as_str().map(Value::from),
    };

    decoded.ok_or_else(|| TableError::InvalidType {
        expected: kind.to_string(),
        found: json_type_name(cell).to_string(),
    })
}

/// Kind of an untyped JSON cell. Null, arrays and objects have no kind.
pub fn classify(cell: &serde_json::Value) -> Result<Kind, TableError> {
    match cell {
        serde_json::Value::Number(n) if n.is_i64() => Ok(Kind::Integer),
        serde_json::Value::Number(_) => Ok(Kind::Float),
        serde_json::Value::Bool(_) => Ok(Kind::Boolean),
        serde_json::Value::String(_) => Ok(Kind::String),
        other => Err(TableError::InvalidType {
            expected: "integer, float, boolean, timestamp or string".to_string(),
            found: json_type_name(other).to_string(),
        }),
    }
}

fn json_type_name(cell: &serde_json::Value) -> &'static str {
    match cell {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
