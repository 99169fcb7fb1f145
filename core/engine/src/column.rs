//! FILENAME: core/engine/src/column.rs
//! PURPOSE: A detached column: one field across all records.
//! CONTEXT: A column only has a kind when every value shares it. Mixed
//! columns can be built but are rejected when handed to a table.

use std::ops::Deref;

use crate::value::{Kind, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column(Vec<Value>);

impl Column {
    pub fn new(values: Vec<Value>) -> Self {
        Column(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0
    }

    /// The shared kind of every value, or `None` when empty or mixed.
    pub fn kind(&self) -> Option<Kind> {
        let first = self.0.first()?.kind();
        self.0.iter().all(|v| v.kind() == first).then_some(first)
    }

    pub fn strings(&self) -> Vec<String> {
        self.0.iter().map(Value::to_text).collect()
    }
}

impl Deref for Column {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Column {
    fn from(values: Vec<Value>) -> Self {
        Column(values)
    }
}

impl FromIterator<Value> for Column {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Column(iter.into_iter().collect())
    }
}

impl IntoIterator for Column {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_only_when_homogeneous() {
        let ints: Column = [1, 2, 3].into_iter().map(Value::from).collect();
        assert_eq!(ints.kind(), Some(Kind::Integer));

        let mixed = Column::new(vec![Value::Integer(1), Value::Float(1.0)]);
        assert_eq!(mixed.kind(), None);

        assert_eq!(Column::default().kind(), None);
    }

    #[test]
    fn test_strings() {
        let col = Column::new(vec![Value::Float(1.0), Value::Float(2.25)]);
        assert_eq!(col.strings(), vec!["1.0", "2.25"]);
    }
}
