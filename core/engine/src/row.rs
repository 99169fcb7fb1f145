//! FILENAME: core/engine/src/row.rs
//! PURPOSE: A detached record: one value per column.

use std::ops::Deref;

use crate::value::{Kind, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn values_mut(&mut self) -> &mut [Value] {
        &mut self.0
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0
    }

    /// Kind of each field, in order.
    pub fn kinds(&self) -> Vec<Kind> {
        self.0.iter().map(Value::kind).collect()
    }

    /// Canonical text of each field.
    pub fn strings(&self) -> Vec<String> {
        self.0.iter().map(Value::to_text).collect()
    }
}

impl Deref for Row {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row(values)
    }
}

impl From<&[Value]> for Row {
    fn from(values: &[Value]) -> Self {
        Row(values.to_vec())
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds a [`Row`] from anything convertible into a [`Value`].
///
/// ```
/// use tabula_engine::{row, Value};
/// let r = row![1, 2.5, "x"];
/// assert_eq!(r[1], Value::Float(2.5));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::default()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Row::new(vec![$($crate::Value::from($value)),+])
    };
}
