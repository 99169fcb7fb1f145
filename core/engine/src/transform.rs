//! FILENAME: core/engine/src/transform.rs
//! PURPOSE: Functional helpers layered on the table core: generate, filter,
//! map and reduce.

use log::debug;

use crate::error::Result;
use crate::header::Header;
use crate::row::Row;
use crate::table::Table;
use crate::value::Value;

impl Table {
    /// Builds a table of `rows` rows, row `i` being `generator(i)`.
    pub fn generate<F>(header: impl Into<Header>, rows: usize, generator: F) -> Result<Table>
    where
        F: FnMut(usize) -> Row,
    {
        Table::with_rows(header, (0..rows).map(generator))
    }

    /// Keeps only the rows for which `keep` returns true, in their current
    /// order. Dropping every row unbinds the column kinds.
    pub fn filter<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Value]) -> bool,
    {
        let (m, n) = self.dims();
        let mut kept = 0;
        for i in 0..m {
            if keep(&self.body[i * n..(i + 1) * n]) {
                self.swap_rows_unchecked(kept, i);
                kept += 1;
            }
        }

        self.body.truncate(kept * n);
        if kept == 0 {
            self.types.clear();
        }
        debug!(target: "table", "filter: kept {} of {} rows", kept, m);
    }

    /// Mutates every row in place. Column kinds are re-derived from the first
    /// row after it is mutated; later rows are not re-checked here, so a
    /// mutator that changes kinds unevenly is reported by `get`/`validate`.
    pub fn map<F>(&mut self, mut mutate: F)
    where
        F: FnMut(&mut [Value]),
    {
        let n = self.width();
        if n == 0 {
            return;
        }
        for (i, row) in self.body.chunks_exact_mut(n).enumerate() {
            mutate(row);
            if i == 0 {
                self.types = row.iter().map(Value::kind).collect();
            }
        }
    }

    /// Folds every row into one, left to right, starting from a copy of the
    /// first row. `None` when the table has no rows.
    pub fn reduce<F>(&self, mut combine: F) -> Option<Row>
    where
        F: FnMut(Row, &[Value]) -> Row,
    {
        let mut rows = self.rows();
        let first = Row::from(rows.next()?);
        Some(rows.fold(first, |acc, row| combine(acc, row)))
    }
}
