//! Save container format and shared vocabulary for revelio.
//!
//! This crate knows how to locate the SQLite database image embedded in a
//! Hogwarts Legacy GVAS save container, and defines the fixed set of logical
//! tables the rest of the workspace queries. It has no database dependency;
//! opening and querying the image lives in `revelio-db`.

pub mod container;
pub mod error;
pub mod table;

pub use container::{DB_IMAGE_MARKER, MAGIC_HEADER, extract_database_image};
pub use error::FormatError;
pub use table::LogicalTable;
