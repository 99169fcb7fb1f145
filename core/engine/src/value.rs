//! FILENAME: core/engine/src/value.rs
//! PURPOSE: Defines the cell value and its kind tag.
//! CONTEXT: Every cell in a table holds a `Value`. The `Kind` of a value is
//! what a column binds to; the canonical text form is what the CSV codec
//! writes and what `parse_text` recovers.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::timestamp::{TimeProfiles, Timestamp};

/// The five kinds a cell may hold. The discriminants are the tags written to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Kind {
    Integer = 1,
    Float = 2,
    Boolean = 3,
    Timestamp = 4,
    String = 5,
}

impl Kind {
    /// Numeric kinds are right-aligned when rendered.
    pub fn is_numeric(self) -> bool {
        matches!(self, Kind::Integer | Kind::Float)
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::Timestamp => "timestamp",
            Kind::String => "string",
        }
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for Kind {
    type Error = TableError;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            1 => Ok(Kind::Integer),
            2 => Ok(Kind::Float),
            3 => Ok(Kind::Boolean),
            4 => Ok(Kind::Timestamp),
            5 => Ok(Kind::String),
            other => Err(TableError::InvalidType {
                expected: "kind tag 1..=5".to_string(),
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(Timestamp),
    String(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::String(_) => Kind::String,
        }
    }

    /// Canonical text. Floats always carry a decimal point so that the text
    /// reads back as a float rather than an integer.
    pub fn to_text(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Float(x) => format_float(*x),
            Value::Boolean(b) => b.to_string(),
            Value::Timestamp(ts) => ts.to_text(),
            Value::String(s) => s.clone(),
        }
    }

    /// Classifies untyped text, trying integer, float, boolean and timestamp
    /// in that order before settling on a string.
    pub fn parse_text(s: &str, profiles: &TimeProfiles) -> Value {
        if let Ok(n) = s.parse::<i64>() {
            return Value::Integer(n);
        }
        if let Ok(x) = s.parse::<f64>() {
            return Value::Float(x);
        }
        if let Some(b) = parse_bool(s) {
            return Value::Boolean(b);
        }
        if let Ok(ts) = profiles.parse(s) {
            return Value::Timestamp(ts);
        }
        Value::String(s.to_string())
    }

    /// Decodes text whose kind is already known.
    pub fn parse_as(kind: Kind, s: &str, profiles: &TimeProfiles) -> Result<Value> {
        let mismatch = || TableError::InvalidType {
            expected: kind.to_string(),
            found: format!("{:?}", s),
        };

        match kind {
            Kind::Integer => s.parse().map(Value::Integer).map_err(|_| mismatch()),
            Kind::Float => s.parse().map(Value::Float).map_err(|_| mismatch()),
            Kind::Boolean => parse_bool(s).map(Value::Boolean).ok_or_else(mismatch),
            Kind::Timestamp => profiles.parse(s).map(Value::Timestamp),
            Kind::String => Ok(Value::String(s.to_string())),
        }
    }

    /// Orders two values of the same kind: numbers by magnitude, false before
    /// true, timestamps chronologically, strings lexicographically.
    /// `0.0` and `-0.0` are equal; NaN sorts after every other float.
    /// Values of different kinds are incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Some(compare_floats(*a, *b)),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// `true`/`false` in lower, upper or title case.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "TRUE" | "True" => Some(true),
        "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => a.is_nan().cmp(&b.is_nan()).then_with(|| a.total_cmp(&b)),
    }
}

fn format_float(x: f64) -> String {
    // Display never switches to exponent notation, so a missing '.' means an
    // integral value (or inf/NaN, which must stay as they are).
    let text = x.to_string();
    if x.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(Timestamp::new(instant))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
