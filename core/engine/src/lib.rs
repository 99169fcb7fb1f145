//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the table engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! Codecs live in the persistence crate; nothing here performs I/O.

pub mod column;
pub mod error;
pub mod header;
pub mod row;
pub mod table;
pub mod timestamp;
pub mod transform;
pub mod value;

// Re-export commonly used types at the crate root
pub use column::Column;
pub use error::{Result, TableError};
pub use header::Header;
pub use row::Row;
pub use table::Table;
pub use timestamp::{TimeProfile, TimeProfiles, Timestamp};
pub use value::{Kind, Value};
