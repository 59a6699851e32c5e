//! The fixed query set and batch fetch results.
//!
//! No query is ever constructed dynamically or takes external input; the
//! complete set is enumerated here, one entry per [`LogicalTable`].

use std::collections::{BTreeMap, HashSet};

use revelio_core::LogicalTable;

use crate::session::TableError;

/// The exact read-only query issued for a logical table.
pub fn table_query(table: LogicalTable) -> &'static str {
    match table {
        LogicalTable::Collection => {
            "SELECT ItemID FROM CollectionDynamic WHERE ItemState='Obtained';"
        }
        LogicalTable::SphinxPuzzle => {
            "SELECT SphinxPuzzleGUID FROM SphinxPuzzleDynamic WHERE EInteractiveState=34;"
        }
        LogicalTable::LootDropComponent => "SELECT LootGroup FROM LootDropComponentDynamic;",
        LogicalTable::EconomicExpiry => "SELECT UniqueID FROM EconomicExpiryDynamic;",
        LogicalTable::MiscData => "SELECT DataName FROM MiscDataDynamic WHERE DataValue='1';",
        LogicalTable::MapLocationData => {
            "SELECT MapLocationID FROM MapLocationDataDynamic WHERE State=11;"
        }
        LogicalTable::Achievement => {
            "SELECT OneOfEach FROM AchievementDynamic WHERE AchievementID='PFA_43';"
        }
        LogicalTable::PlayerStats => {
            "SELECT ActivityName FROM PlayerStatsDynamic WHERE ActivityValue='Complete';"
        }
        LogicalTable::CollectionConjurations => {
            "SELECT ItemID FROM CollectionDynamic WHERE ItemState='Obtained' \
             AND SubcategoryID='Exploration' AND CategoryID='Conjurations';"
        }
    }
}

/// Result of querying the full table set: row sets for the tables that
/// could be read, and one error per table that could not.
#[derive(Debug, Default)]
pub struct TableData {
    pub rows: BTreeMap<LogicalTable, HashSet<String>>,
    pub errors: Vec<TableError>,
}

impl TableData {
    /// True when not a single table could be read.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
