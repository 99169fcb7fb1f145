//! FILENAME: core/engine/src/table.rs
//! PURPOSE: The table: a header, one bound kind per column, and every cell
//! in a single row-major buffer.
//! CONTEXT: Cell (i, j) lives at `body[i * width + j]`. Rows are contiguous
//! slices; columns are strided. Column kinds are bound by the first row ever
//! appended and cleared again when the last row goes, so `types` is empty
//! exactly when the table holds no rows.

use std::cmp::Ordering;

use log::debug;

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::header::Header;
use crate::row::Row;
use crate::timestamp::Timestamp;
use crate::value::{Kind, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub(crate) header: Header,
    pub(crate) types: Vec<Kind>,
    pub(crate) body: Vec<Value>,
}

impl Table {
    /// Creates a table with the given columns and no rows.
    pub fn new(header: impl Into<Header>) -> Self {
        Table {
            header: header.into(),
            types: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Creates a table and appends `rows`, binding column kinds to the first.
    pub fn with_rows<I>(header: impl Into<Header>, rows: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        let mut table = Table::new(header);
        table.append(rows)?;
        Ok(table)
    }

    /// (rows, columns). A table without columns has no rows.
    pub fn dims(&self) -> (usize, usize) {
        let n = self.header.len();
        if n == 0 {
            (0, 0)
        } else {
            (self.body.len() / n, n)
        }
    }

    pub fn height(&self) -> usize {
        self.dims().0
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Bound column kinds; empty while the table has no rows.
    pub fn types(&self) -> &[Kind] {
        &self.types
    }

    // ========================================================================
    // ROWS
    // ========================================================================

    /// Appends rows in order. The first row appended to a table without rows
    /// binds the column kinds; every other row must match them. Either every
    /// row is appended or, on error, none is.
    pub fn append<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        let rows: Vec<Row> = rows.into_iter().map(Into::into).collect();
        let n = self.width();
        let mut types = self.types.clone();

        for row in &rows {
            if row.len() != n {
                return Err(TableError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
            if types.is_empty() {
                types = row.kinds();
            } else {
                check_kinds(&types, row)?;
            }
        }

        if n == 0 {
            return Ok(());
        }

        self.types = types;
        self.body.reserve(rows.len() * n);
        for row in rows {
            self.body.extend(row.into_values());
        }
        Ok(())
    }

    pub fn append_row(&mut self, row: impl Into<Row>) -> Result<()> {
        let row: Row = row.into();
        self.append(std::iter::once(row))
    }

    /// Inserts `row` so that it becomes row `i`; rows from `i` on move down
    /// by one. `i == height()` appends.
    pub fn insert(&mut self, i: usize, row: impl Into<Row>) -> Result<()> {
        let m = self.height();
        if i > m {
            return Err(TableError::out_of_range(i, m));
        }

        self.append_row(row)?;
        for k in (i + 1..=m).rev() {
            self.swap_rows_unchecked(k, k - 1);
        }
        Ok(())
    }

    /// Removes row `i` and returns it. Removing the last row unbinds the
    /// column kinds.
    pub fn remove(&mut self, i: usize) -> Result<Row> {
        self.check_row(i)?;
        let n = self.width();
        let row: Row = self.body.drain(i * n..(i + 1) * n).collect();
        if self.body.len() < n {
            self.types.clear();
        }
        Ok(row)
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        self.swap_rows_unchecked(i, j);
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let n = self.width();
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (front, back) = self.body.split_at_mut(hi * n);
        front[lo * n..(lo + 1) * n].swap_with_slice(&mut back[..n]);
    }

    // ========================================================================
    // COLUMNS
    // ========================================================================

    /// Appends a trailing column. Its length must equal the row count, except
    /// on a table without columns, where the column also sets the row count.
    pub fn append_col(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let (m, n) = self.dims();
        let name = name.into();
        let kind = homogeneous_kind(&column)?;

        if n == 0 {
            self.header.push(name);
            self.types = kind.into_iter().collect();
            self.body = column.into_values();
            return Ok(());
        }

        if column.len() != m {
            return Err(TableError::DimensionMismatch {
                expected: m,
                found: column.len(),
            });
        }

        self.header.push(name);
        let Some(kind) = kind else {
            return Ok(());
        };

        debug!(target: "table", "append_col: rebuilding {}x{} body as {}x{}", m, n, m, n + 1);
        let mut old = std::mem::take(&mut self.body).into_iter();
        let mut body = Vec::with_capacity(m * (n + 1));
        for cell in column {
            body.extend(old.by_ref().take(n));
            body.push(cell);
        }
        self.body = body;
        self.types.push(kind);
        Ok(())
    }

    /// Inserts a column so that it becomes column `j`; columns from `j` on
    /// move right by one. `j == width()` appends.
    pub fn insert_col(&mut self, j: usize, name: impl Into<String>, column: Column) -> Result<()> {
        let n = self.width();
        if j > n {
            return Err(TableError::out_of_range(j, n));
        }

        self.append_col(name, column)?;
        for k in (j + 1..=n).rev() {
            self.swap_cols_unchecked(k, k - 1);
        }
        Ok(())
    }

    /// Removes column `j`, returning its name and values.
    pub fn remove_col(&mut self, j: usize) -> Result<(String, Column)> {
        self.check_col(j)?;
        let (m, n) = self.dims();

        debug!(target: "table", "remove_col: rebuilding {}x{} body as {}x{}", m, n, m, n - 1);
        let mut column = Vec::with_capacity(m);
        let mut body = Vec::with_capacity(m * (n - 1));
        for (k, value) in std::mem::take(&mut self.body).into_iter().enumerate() {
            if k % n == j {
                column.push(value);
            } else {
                body.push(value);
            }
        }

        self.body = body;
        if !self.types.is_empty() {
            self.types.remove(j);
        }
        let name = self.header.remove(j);
        Ok((name, Column::new(column)))
    }

    /// Exchanges columns `i` and `j`: names, kinds and every row's cells.
    pub fn swap_cols(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_col(i)?;
        self.check_col(j)?;
        self.swap_cols_unchecked(i, j);
        Ok(())
    }

    fn swap_cols_unchecked(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.header.swap(i, j);
        if !self.types.is_empty() {
            self.types.swap(i, j);
        }
        let n = self.width();
        for row in self.body.chunks_exact_mut(n) {
            row.swap(i, j);
        }
    }

    // ========================================================================
    // CELLS
    // ========================================================================

    /// Cell (i, j). A stored value whose kind disagrees with its column is
    /// reported rather than returned.
    pub fn get(&self, i: usize, j: usize) -> Result<&Value> {
        self.check_row(i)?;
        self.check_col(j)?;
        let value = &self.body[i * self.width() + j];
        if let Some(&expected) = self.types.get(j) {
            if value.kind() != expected {
                return Err(TableError::type_mismatch(expected, value.kind()));
            }
        }
        Ok(value)
    }

    /// Replaces cell (i, j). The value must have the column's kind.
    pub fn set(&mut self, i: usize, j: usize, value: impl Into<Value>) -> Result<()> {
        self.check_row(i)?;
        self.check_col(j)?;
        let value = value.into();
        let expected = self.types[j];
        if value.kind() != expected {
            return Err(TableError::type_mismatch(expected, value.kind()));
        }
        let n = self.width();
        self.body[i * n + j] = value;
        Ok(())
    }

    pub fn get_int(&self, i: usize, j: usize) -> Result<i64> {
        self.get_typed(i, j, Kind::Integer, Value::as_int)
    }

    pub fn get_float(&self, i: usize, j: usize) -> Result<f64> {
        self.get_typed(i, j, Kind::Float, Value::as_float)
    }

    pub fn get_bool(&self, i: usize, j: usize) -> Result<bool> {
        self.get_typed(i, j, Kind::Boolean, Value::as_bool)
    }

    pub fn get_str(&self, i: usize, j: usize) -> Result<&str> {
        self.get_typed(i, j, Kind::String, Value::as_str)
    }

    pub fn get_timestamp(&self, i: usize, j: usize) -> Result<&Timestamp> {
        self.get_typed(i, j, Kind::Timestamp, Value::as_timestamp)
    }

    fn get_typed<'a, T>(
        &'a self,
        i: usize,
        j: usize,
        kind: Kind,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T> {
        let value = self.get(i, j)?;
        extract(value).ok_or_else(|| TableError::type_mismatch(kind, value.kind()))
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Borrowed cells of row `i`.
    pub fn row_slice(&self, i: usize) -> Result<&[Value]> {
        self.check_row(i)?;
        let n = self.width();
        Ok(&self.body[i * n..(i + 1) * n])
    }

    /// Detached copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Row> {
        self.row_slice(i).map(Row::from)
    }

    /// Borrowed rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        // A table without columns has an empty body, so the chunk size of 1
        // never yields anything.
        self.body.chunks_exact(self.width().max(1))
    }

    /// Borrowed cells of column `j`, top to bottom.
    pub fn col_iter(&self, j: usize) -> Result<impl Iterator<Item = &Value>> {
        self.check_col(j)?;
        Ok(self.body.iter().skip(j).step_by(self.width()))
    }

    /// Detached copy of column `j`.
    pub fn col(&self, j: usize) -> Result<Column> {
        Ok(self.col_iter(j)?.cloned().collect())
    }

    pub fn col_ints(&self, j: usize) -> Result<Vec<i64>> {
        self.col_typed(j, Kind::Integer, Value::as_int)
    }

    pub fn col_floats(&self, j: usize) -> Result<Vec<f64>> {
        self.col_typed(j, Kind::Float, Value::as_float)
    }

    pub fn col_bools(&self, j: usize) -> Result<Vec<bool>> {
        self.col_typed(j, Kind::Boolean, Value::as_bool)
    }

    pub fn col_strs(&self, j: usize) -> Result<Vec<&str>> {
        self.col_typed(j, Kind::String, Value::as_str)
    }

    fn col_typed<'a, T>(
        &'a self,
        j: usize,
        kind: Kind,
        extract: impl Fn(&'a Value) -> Option<T>,
    ) -> Result<Vec<T>> {
        self.col_iter(j)?
            .map(|value| extract(value).ok_or_else(|| TableError::type_mismatch(kind, value.kind())))
            .collect()
    }

    /// The header followed by the canonical text of every row.
    pub fn strings(&self) -> Vec<Vec<String>> {
        let mut lines = Vec::with_capacity(self.height() + 1);
        lines.push(self.header.names().to_vec());
        lines.extend(self.rows().map(|row| row.iter().map(Value::to_text).collect()));
        lines
    }

    // ========================================================================
    // WHOLE-TABLE OPERATIONS
    // ========================================================================

    /// Places tables side by side. All must have the same number of rows;
    /// columns keep the left-to-right order of `tables`.
    pub fn join<'a, I>(tables: I) -> Result<Table>
    where
        I: IntoIterator<Item = &'a Table>,
    {
        let tables: Vec<&Table> = tables.into_iter().collect();
        let Some(first) = tables.first() else {
            return Ok(Table::default());
        };

        let m = first.height();
        if let Some(other) = tables.iter().find(|t| t.height() != m) {
            return Err(TableError::DimensionMismatch {
                expected: m,
                found: other.height(),
            });
        }

        let mut joined = Table::default();
        for table in &tables {
            joined.header.extend_from(&table.header);
            if m > 0 {
                joined.types.extend_from_slice(&table.types);
            }
        }

        joined.body.reserve(m * joined.width());
        for i in 0..m {
            for table in &tables {
                let n = table.width();
                joined.body.extend_from_slice(&table.body[i * n..(i + 1) * n]);
            }
        }

        debug!(target: "table", "join: {} tables into {}x{}", tables.len(), m, joined.width());
        Ok(joined)
    }

    /// Sorts rows ascending by column `j`. Stable.
    pub fn sort(&mut self, j: usize) -> Result<()> {
        self.stable_sort(j)
    }

    /// Sorts rows ascending by column `j`, keeping rows with equal keys in
    /// their current order.
    pub fn stable_sort(&mut self, j: usize) -> Result<()> {
        self.check_col(j)?;
        let (m, n) = self.dims();
        if m < 2 {
            return Ok(());
        }
        if let Some(&expected) = self.types.get(j) {
            if let Some(stray) = self.col_iter(j)?.find(|v| v.kind() != expected) {
                return Err(TableError::type_mismatch(expected, stray.kind()));
            }
        }

        debug!(target: "table", "sort: {} rows by column {}", m, j);
        let mut cells = std::mem::take(&mut self.body).into_iter();
        let mut rows: Vec<Vec<Value>> = (0..m).map(|_| cells.by_ref().take(n).collect()).collect();
        rows.sort_by(|a, b| compare_keys(&a[j], &b[j]));
        self.body = rows.into_iter().flatten().collect();
        Ok(())
    }

    /// Re-derives the dimensions and checks every stored value against its
    /// column kind, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        let n = self.width();
        let len = self.body.len();
        if n == 0 {
            return match len {
                0 => Ok(()),
                _ => Err(TableError::DimensionMismatch { expected: 0, found: len }),
            };
        }
        if len % n != 0 {
            return Err(TableError::DimensionMismatch {
                expected: len - len % n,
                found: len,
            });
        }

        let expected_types = if len == 0 { 0 } else { n };
        if self.types.len() != expected_types {
            return Err(TableError::DimensionMismatch {
                expected: expected_types,
                found: self.types.len(),
            });
        }

        for (k, value) in self.body.iter().enumerate() {
            let expected = self.types[k % n];
            if value.kind() != expected {
                return Err(TableError::type_mismatch(expected, value.kind()));
            }
        }
        Ok(())
    }

    pub(crate) fn check_row(&self, i: usize) -> Result<()> {
        let m = self.height();
        if i < m {
            Ok(())
        } else {
            Err(TableError::out_of_range(i, m))
        }
    }

    pub(crate) fn check_col(&self, j: usize) -> Result<()> {
        let n = self.width();
        if j < n {
            Ok(())
        } else {
            Err(TableError::out_of_range(j, n))
        }
    }
}

fn check_kinds(types: &[Kind], row: &[Value]) -> Result<()> {
    for (&expected, value) in types.iter().zip(row) {
        if value.kind() != expected {
            return Err(TableError::type_mismatch(expected, value.kind()));
        }
    }
    Ok(())
}

/// Kind shared by every value of `column`; `None` when it is empty.
fn homogeneous_kind(column: &Column) -> Result<Option<Kind>> {
    let Some(first) = column.first().map(Value::kind) else {
        return Ok(None);
    };
    match column.iter().map(Value::kind).find(|&k| k != first) {
        Some(other) => Err(TableError::type_mismatch(first, other)),
        None => Ok(Some(first)),
    }
}

fn compare_keys(a: &Value, b: &Value) -> Ordering {
    a.compare(b).unwrap_or_else(|| a.kind().cmp(&b.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn numbers() -> Table {
        Table::with_rows(
            ["Integers", "Floats"],
            [row![0, 0.0], row![-1, -1.1], row![4, -4.4], row![-3, 3.3]],
        )
        .unwrap()
    }

    #[test]
    fn test_dims() {
        assert_eq!(numbers().dims(), (4, 2));
        assert_eq!(Table::new(["a", "b"]).dims(), (0, 2));
        assert_eq!(Table::default().dims(), (0, 0));
    }

    #[test]
    fn test_first_append_binds_types() {
        let mut table = Table::new(["a", "b"]);
        assert!(table.types().is_empty());
        table.append_row(row![1, "x"]).unwrap();
        assert_eq!(table.types(), &[Kind::Integer, Kind::String]);
    }

    #[test]
    fn test_append_mismatch_leaves_table_unchanged() {
        let mut table = numbers();
        let before = table.clone();

        let err = table.append([row![5, 5.5], row![6, "six"]]).unwrap_err();
        assert!(matches!(err, TableError::InvalidType { .. }));
        assert_eq!(table, before);

        let err = table.append_row(row![1]).unwrap_err();
        assert_eq!(err, TableError::DimensionMismatch { expected: 2, found: 1 });
        assert_eq!(table, before);
    }

    #[test]
    fn test_get_and_set() {
        let mut table = numbers();
        assert_eq!(table.get(2, 1).unwrap(), &Value::Float(-4.4));
        assert_eq!(table.get_int(3, 0).unwrap(), -3);

        table.set(2, 1, 2.2).unwrap();
        assert_eq!(table.get_float(2, 1).unwrap(), 2.2);

        assert!(matches!(table.set(2, 1, 2), Err(TableError::InvalidType { .. })));
        assert_eq!(table.get(4, 0), Err(TableError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(table.get(0, 2), Err(TableError::IndexOutOfRange { index: 2, len: 2 }));
        assert!(matches!(table.get_str(0, 0), Err(TableError::InvalidType { .. })));
    }

    #[test]
    fn test_insert_moves_rows_down() {
        let mut table = numbers();
        table.insert(1, row![9, 9.9]).unwrap();
        assert_eq!(table.col_ints(0).unwrap(), vec![0, 9, -1, 4, -3]);

        table.insert(5, row![7, 7.7]).unwrap();
        assert_eq!(table.col_ints(0).unwrap(), vec![0, 9, -1, 4, -3, 7]);

        assert_eq!(
            table.insert(7, row![1, 1.0]),
            Err(TableError::IndexOutOfRange { index: 7, len: 6 })
        );
    }

    #[test]
    fn test_insert_then_remove_is_identity() {
        let original = numbers();
        for i in 0..=original.height() {
            let mut table = original.clone();
            table.insert(i, row![8, 8.8]).unwrap();
            assert_eq!(table.remove(i).unwrap(), row![8, 8.8]);
            assert_eq!(table, original);
        }
    }

    #[test]
    fn test_remove_last_row_unbinds_types() {
        let mut table = Table::with_rows(["a"], [row![1]]).unwrap();
        assert_eq!(table.remove(0).unwrap(), row![1]);
        assert!(table.types().is_empty());

        table.append_row(row!["now a string"]).unwrap();
        assert_eq!(table.types(), &[Kind::String]);
    }

    #[test]
    fn test_swap_rows() {
        let mut table = numbers();
        table.swap(0, 3).unwrap();
        assert_eq!(table.row(0).unwrap(), row![-3, 3.3]);
        assert_eq!(table.row(3).unwrap(), row![0, 0.0]);
        assert!(table.swap(0, 4).is_err());
    }

    #[test]
    fn test_append_col_interleaves_rows() {
        let mut table = numbers();
        let flags = Column::new(vec![true.into(), false.into(), true.into(), false.into()]);
        table.append_col("Flags", flags).unwrap();

        assert_eq!(table.dims(), (4, 3));
        assert_eq!(table.types(), &[Kind::Integer, Kind::Float, Kind::Boolean]);
        assert_eq!(table.row(1).unwrap(), row![-1, -1.1, false]);
        assert_eq!(table.row(3).unwrap(), row![-3, 3.3, false]);
        table.validate().unwrap();
    }

    #[test]
    fn test_append_col_checks_length_and_kind() {
        let mut table = numbers();
        let short = Column::new(vec![Value::Integer(1)]);
        assert_eq!(
            table.append_col("x", short),
            Err(TableError::DimensionMismatch { expected: 4, found: 1 })
        );

        let mixed = Column::new(vec![1.into(), 2.into(), "3".into(), 4.into()]);
        assert!(matches!(table.append_col("x", mixed), Err(TableError::InvalidType { .. })));
        assert_eq!(table, numbers());
    }

    #[test]
    fn test_append_col_bootstraps_empty_table() {
        let mut table = Table::default();
        table
            .append_col("names", Column::new(vec!["a".into(), "b".into(), "c".into()]))
            .unwrap();
        assert_eq!(table.dims(), (3, 1));
        assert_eq!(table.types(), &[Kind::String]);
    }

    #[test]
    fn test_insert_col_preserves_other_columns() {
        let mut table = Table::with_rows(["a", "b", "c"], [row![1, 2, 3], row![4, 5, 6]]).unwrap();
        table
            .insert_col(1, "s", Column::new(vec!["x".into(), "y".into()]))
            .unwrap();

        assert_eq!(table.header(), &Header::from(["a", "s", "b", "c"]));
        assert_eq!(table.types(), &[Kind::Integer, Kind::String, Kind::Integer, Kind::Integer]);
        assert_eq!(table.row(0).unwrap(), row![1, "x", 2, 3]);
        assert_eq!(table.row(1).unwrap(), row![4, "y", 5, 6]);
    }

    #[test]
    fn test_remove_col() {
        let mut table = Table::with_rows(["a", "b", "c"], [row![1, "x", true], row![2, "y", false]]).unwrap();
        let (name, column) = table.remove_col(1).unwrap();

        assert_eq!(name, "b");
        assert_eq!(column, Column::new(vec!["x".into(), "y".into()]));
        assert_eq!(table.dims(), (2, 2));
        assert_eq!(table.types(), &[Kind::Integer, Kind::Boolean]);
        assert_eq!(table.row(1).unwrap(), row![2, false]);
        table.validate().unwrap();
    }

    #[test]
    fn test_remove_then_insert_col_roundtrip() {
        let original = Table::with_rows(["a", "b", "c"], [row![1, "x", 1.5], row![2, "y", 2.5]]).unwrap();
        for j in 0..3 {
            let mut table = original.clone();
            let (name, column) = table.remove_col(j).unwrap();
            table.insert_col(j, name, column).unwrap();
            assert_eq!(table, original);
        }
    }

    #[test]
    fn test_swap_cols() {
        let mut table = numbers();
        table.swap_cols(0, 1).unwrap();
        assert_eq!(table.header(), &Header::from(["Floats", "Integers"]));
        assert_eq!(table.types(), &[Kind::Float, Kind::Integer]);
        assert_eq!(table.row(2).unwrap(), row![-4.4, 4]);
        assert!(table.swap_cols(0, 2).is_err());
    }

    #[test]
    fn test_join() {
        let left = Table::with_rows(["a", "b"], [row![1, 2], row![3, 4], row![5, 6]]).unwrap();
        let right = Table::with_rows(["c", "d", "e"], [row!["x", 1.0, true], row!["y", 2.0, false], row!["z", 3.0, true]])
            .unwrap();

        let joined = Table::join([&left, &right]).unwrap();
        assert_eq!(joined.dims(), (3, 5));
        assert_eq!(joined.header(), &Header::from(["a", "b", "c", "d", "e"]));
        assert_eq!(joined.row(1).unwrap(), row![3, 4, "y", 2.0, false]);
        joined.validate().unwrap();

        let mut longer = right.clone();
        longer.append_row(row!["w", 4.0, false]).unwrap();
        assert_eq!(
            Table::join([&left, &longer]),
            Err(TableError::DimensionMismatch { expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut table = Table::with_rows(["k", "v"], [row![1, "a"], row![1, "b"], row![0, "c"]]).unwrap();
        table.sort(0).unwrap();
        assert_eq!(table.col_strs(1).unwrap(), vec!["c", "a", "b"]);
        assert_eq!(table.col_ints(0).unwrap(), vec![0, 1, 1]);
    }

    #[test]
    fn test_sort_by_each_kind() {
        let mut table = Table::with_rows(
            ["f", "b", "s"],
            [row![2.5, true, "pear"], row![-1.0, false, "apple"], row![0.5, true, "fig"]],
        )
        .unwrap();

        table.stable_sort(0).unwrap();
        assert_eq!(table.col_floats(0).unwrap(), vec![-1.0, 0.5, 2.5]);

        table.stable_sort(1).unwrap();
        assert_eq!(table.col_bools(1).unwrap(), vec![false, true, true]);
        assert_eq!(table.col_floats(0).unwrap(), vec![-1.0, 0.5, 2.5]);

        table.stable_sort(2).unwrap();
        assert_eq!(table.col_strs(2).unwrap(), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_sort_keeps_order_of_signed_zeros() {
        let mut table = Table::with_rows(["k", "v"], [row![0.0, "a"], row![-0.0, "b"], row![-1.0, "c"]]).unwrap();
        table.sort(0).unwrap();
        assert_eq!(table.col_strs(1).unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_puts_nan_last() {
        let mut table = Table::with_rows(["k"], [row![f64::NAN], row![2.0], row![-3.0]]).unwrap();
        table.sort(0).unwrap();
        let keys = table.col_floats(0).unwrap();
        assert_eq!(&keys[..2], &[-3.0, 2.0]);
        assert!(keys[2].is_nan());
    }

    #[test]
    fn test_validate_catches_corruption() {
        let mut table = numbers();
        table.validate().unwrap();

        table.body[3] = Value::from("oops");
        assert!(matches!(table.validate(), Err(TableError::InvalidType { .. })));

        table.body.pop();
        assert!(matches!(table.validate(), Err(TableError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_copy_is_deep() {
        let original = numbers();
        let mut copy = original.clone();
        copy.set(0, 0, 100).unwrap();
        assert_eq!(original.get_int(0, 0).unwrap(), 0);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_strings() {
        let table = Table::with_rows(["i", "f"], [row![1, 4.0]]).unwrap();
        assert_eq!(
            table.strings(),
            vec![vec!["i".to_string(), "f".to_string()], vec!["1".to_string(), "4.0".to_string()]]
        );
    }
}
