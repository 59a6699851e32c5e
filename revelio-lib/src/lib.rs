//! Save scanning pipeline and collectible reconciliation engine.
//!
//! `scan_save` runs the whole extraction-and-reconciliation pass over one
//! save file: slice out the database image, query the fixed table set, mark
//! every catalog entry obtained or missing, and evaluate the two known
//! save-corruption heuristics.

pub mod reconcile;
pub mod scan;

pub use reconcile::{BugFlags, detect_bugs, reconcile};
pub use scan::{ScanError, ScanReport, scan_save};
