//! The fixed set of logical tables read from the embedded database.
//!
//! Each variant names one read-only query the engine issues. Two variants
//! (`Collection` and `CollectionConjurations`) target the same physical
//! table with different filters; the logical id keeps them distinct.

/// One logical table in the embedded save database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalTable {
    /// Obtained field guide pages
    Collection,
    /// Completed Merlin trials
    SphinxPuzzle,
    /// Opened vivarium chests
    LootDropComponent,
    /// Opened butterfly chests
    EconomicExpiry,
    /// Misc one-shot flags (braziers, moths, statues, Daedalian keys)
    MiscData,
    /// Map-tracked locations (chests, moons, balloons, platforms, ...)
    MapLocationData,
    /// Finishing Touches achievement progress (composite rows)
    Achievement,
    /// Player activity completion markers
    PlayerStats,
    /// Exploration conjurations subset of the collection table
    CollectionConjurations,
}

impl LogicalTable {
    /// Every logical table, in query order.
    pub const ALL: [LogicalTable; 9] = [
        LogicalTable::Collection,
        LogicalTable::SphinxPuzzle,
        LogicalTable::LootDropComponent,
        LogicalTable::EconomicExpiry,
        LogicalTable::MiscData,
        LogicalTable::MapLocationData,
        LogicalTable::Achievement,
        LogicalTable::PlayerStats,
        LogicalTable::CollectionConjurations,
    ];

    /// Logical identifier, matching the in-save table name (with a suffix
    /// for the second collection query).
    pub fn name(self) -> &'static str {
        match self {
            LogicalTable::Collection => "CollectionDynamic",
            LogicalTable::SphinxPuzzle => "SphinxPuzzleDynamic",
            LogicalTable::LootDropComponent => "LootDropComponentDynamic",
            LogicalTable::EconomicExpiry => "EconomicExpiryDynamic",
            LogicalTable::MiscData => "MiscDataDynamic",
            LogicalTable::MapLocationData => "MapLocationDataDynamic",
            LogicalTable::Achievement => "AchievementDynamic",
            LogicalTable::PlayerStats => "PlayerStatsDynamic",
            LogicalTable::CollectionConjurations => "CollectionDynamic2",
        }
    }

    /// Display names of the collectible categories that become unreliable
    /// when this table cannot be read.
    pub fn affected_collectibles(self) -> &'static [&'static str] {
        match self {
            LogicalTable::Collection => &["Revelio field guide pages"],
            LogicalTable::SphinxPuzzle => &["Merlin trials"],
            LogicalTable::LootDropComponent => &["Vivarium chests"],
            LogicalTable::EconomicExpiry => &["Butterfly chests"],
            LogicalTable::MiscData => &[
                "Brazier/Moth/Statue field guide pages",
                "Daedalian Keys",
            ],
            LogicalTable::MapLocationData => &[
                "Flying field guide pages",
                "Collection Chests",
                "Demiguise Moons",
                "Balloon Sets",
                "Landing Platforms",
                "Astronomy Tables",
                "Ancient Magic Hotspots",
                "Infamous Foes",
            ],
            LogicalTable::Achievement => &["Finishing Touches enemies"],
            LogicalTable::PlayerStats => &["Butterfly quest bug detector"],
            LogicalTable::CollectionConjurations => &["Conjuration bug detector"],
        }
    }

    /// Whether result values are comma-delimited composites that must be
    /// split into individual identifiers.
    pub fn splits_rows(self) -> bool {
        matches!(self, LogicalTable::Achievement)
    }
}
