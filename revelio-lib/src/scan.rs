//! The full extraction-and-reconciliation pass over one save file.

use thiserror::Error;

use revelio_catalog::Collectible;
use revelio_core::{FormatError, extract_database_image};
use revelio_db::{SaveSession, SessionError};

use crate::reconcile::{BugFlags, detect_bugs, reconcile};

/// The scan could not produce any result. Per-table failures are not
/// errors at this level; they ride along in the [`ScanReport`].
#[derive(Debug, Error)]
pub enum ScanError {
    /// The save container layout is not what we expect
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The embedded image could not be opened as a database
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The database opened but not a single table could be read
    #[error("no readable tables in the embedded database")]
    NoReadableTables,
}

/// Everything one scan produces for the report layer.
#[derive(Debug)]
pub struct ScanReport {
    /// The full catalog with `collected` set on every entry.
    pub collectibles: Vec<Collectible>,
    /// Display names of collectible categories whose table could not be
    /// read; their entries are reported conservatively as missing.
    pub unreadable: Vec<&'static str>,
    /// Save-corruption heuristics.
    pub bugs: BugFlags,
}

/// Run the whole pipeline over raw save bytes.
///
/// The database session (and its temp backing file) lives only for the
/// query batch in the middle of this function; reconciliation runs against
/// plain in-memory row sets.
pub fn scan_save(save: &[u8], catalog: &[Collectible]) -> Result<ScanReport, ScanError> {
    let image = extract_database_image(save)?;

    let session = SaveSession::open(image)?;
    let data = session.fetch_all();
    drop(session);

    if data.is_empty() {
        return Err(ScanError::NoReadableTables);
    }

    let collectibles = reconcile(catalog, &data.rows);
    let bugs = detect_bugs(&collectibles, &data.rows);
    let unreadable = data
        .errors
        .iter()
        .flat_map(|err| err.table.affected_collectibles().iter().copied())
        .collect();

    Ok(ScanReport {
        collectibles,
        unreadable,
        bugs,
    })
}
