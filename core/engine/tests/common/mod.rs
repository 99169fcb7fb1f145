//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the engine integration tests.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use tabula_engine::{row, Table};

/// The two-column numeric table used throughout the scenarios.
pub fn numbers() -> Table {
    Table::with_rows(
        ["Integers", "Floats"],
        [row![0, 0.0], row![-1, -1.1], row![4, -4.4], row![-3, 3.3]],
    )
    .unwrap()
}

/// One column of every kind, three rows.
pub fn all_kinds() -> Table {
    Table::with_rows(
        ["int", "float", "bool", "time", "text"],
        [
            row![3, 1.5, true, instant(2021, 1, 3), "gamma"],
            row![1, -2.0, false, instant(2021, 1, 1), "alpha"],
            row![2, 0.25, true, instant(2021, 1, 2), "beta"],
        ],
    )
    .unwrap()
}

pub fn instant(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
}

/// Every stored cell has its column's bound kind.
pub fn assert_kinds_hold(table: &Table) {
    let (m, n) = table.dims();
    for i in 0..m {
        for j in 0..n {
            let value = table.get(i, j).unwrap();
            assert_eq!(value.kind(), table.types()[j], "cell ({}, {})", i, j);
        }
    }
    table.validate().unwrap();
}
