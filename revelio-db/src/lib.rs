//! Read-only SQLite access to an extracted save database image.
//!
//! The image bytes are staged into a temporary file (SQLite wants
//! file-backed storage), opened read-only via rusqlite, and queried with a
//! fixed, compile-time query set. The temp storage lives exactly as long as
//! the session value and is removed on every exit path.

pub mod queries;
pub mod session;

pub use queries::{TableData, table_query};
pub use session::{SaveSession, SessionError, TableError};
