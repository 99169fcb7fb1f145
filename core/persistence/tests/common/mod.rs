//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the persistence integration tests.

#![allow(dead_code)]

use chrono::{FixedOffset, TimeZone};
use tabula_engine::{row, Table, Timestamp};

/// One column of every kind, three rows.
pub fn all_kinds() -> Table {
    Table::with_rows(
        ["int", "float", "bool", "time", "text"],
        [
            row![3, 1.5, true, stamp(2021, 1, 3), "gamma"],
            row![1, -2.0, false, stamp(2021, 1, 1), "alpha, quoted"],
            row![2, 0.25, true, stamp(2021, 1, 2), "beta"],
        ],
    )
    .unwrap()
}

pub fn stamp(year: i32, month: u32, day: u32) -> Timestamp {
    let instant = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(year, month, day, 9, 30, 0)
        .unwrap();
    Timestamp::new(instant)
}
