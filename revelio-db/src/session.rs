//! Scoped read-only session over a staged database image.

use std::collections::HashSet;
use std::fs;

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};
use tempfile::TempDir;
use thiserror::Error;

use revelio_core::LogicalTable;

use crate::queries::{TableData, table_query};

/// The session could not be established: the image could not be staged to
/// disk, or SQLite rejected it as a database.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not stage database image: {0}")]
    Io(#[from] std::io::Error),
    #[error("embedded image is not a readable database: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A single logical table's query failed. Recoverable: the batch continues
/// with the remaining tables.
#[derive(Debug, Error)]
#[error("query against {} failed: {source}", .table.name())]
pub struct TableError {
    pub table: LogicalTable,
    #[source]
    pub source: rusqlite::Error,
}

/// An open, read-only session over one extracted database image.
///
/// Owns the temporary directory backing the SQLite file; dropping the
/// session closes the connection and removes the staging directory, on
/// every exit path.
pub struct SaveSession {
    conn: Connection,
    _staging: TempDir,
}

impl SaveSession {
    /// Stage the image to a temp file and open it read-only.
    ///
    /// SQLite opens files lazily, so a `sqlite_master` introspection query
    /// runs here to reject images that are not minimally queryable.
    pub fn open(image: &[u8]) -> Result<Self, SessionError> {
        let staging = tempfile::tempdir()?;
        let db_path = staging.path().join("image.db");
        fs::write(&db_path, image)?;

        let conn = Connection::open_with_flags(
            &db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        {
            let mut stmt =
                conn.prepare("SELECT name FROM sqlite_master WHERE type='table';")?;
            let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
            let tables = names.collect::<Result<Vec<String>, _>>()?;
            log::debug!("opened save database with {} tables", tables.len());
        }

        Ok(Self {
            conn,
            _staging: staging,
        })
    }

    /// Run the fixed query for one logical table and collect the distinct
    /// first-column values.
    pub fn fetch_table(&self, table: LogicalTable) -> Result<HashSet<String>, TableError> {
        self.run_query(table)
            .map_err(|source| TableError { table, source })
    }

    fn run_query(&self, table: LogicalTable) -> Result<HashSet<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(table_query(table))?;
        let rows = stmt.query_map([], |row| row.get::<_, Value>(0))?;

        let mut out = HashSet::new();
        for row in rows {
            // Identifiers are opaque strings; a few tables store them as
            // numbers. NULL and BLOB values carry no usable identifier.
            let value = match row? {
                Value::Text(s) => s,
                Value::Integer(n) => n.to_string(),
                Value::Real(f) => f.to_string(),
                Value::Null | Value::Blob(_) => continue,
            };
            if table.splits_rows() {
                out.extend(
                    value
                        .split(',')
                        .filter(|part| !part.is_empty())
                        .map(str::to_string),
                );
            } else {
                out.insert(value);
            }
        }
        Ok(out)
    }

    /// Query every logical table, tolerating per-table failure.
    ///
    /// A failed table is recorded and skipped, never retried; the remaining
    /// tables are still queried.
    pub fn fetch_all(&self) -> TableData {
        let mut data = TableData::default();
        for table in LogicalTable::ALL {
            match self.fetch_table(table) {
                Ok(rows) => {
                    data.rows.insert(table, rows);
                }
                Err(err) => {
                    log::warn!("{err}");
                    data.errors.push(err);
                }
            }
        }
        data
    }
}
