//! Catalog annotation and save-corruption heuristics.
//!
//! Pure functions over the catalog and the fetched row sets; nothing here
//! touches the database, so every branch is unit-testable with synthetic
//! data.

use std::collections::{BTreeMap, HashSet};

use revelio_catalog::{Collectible, CollectibleKind};
use revelio_core::LogicalTable;

/// Known save-data inconsistencies unrelated to genuinely missing
/// collectibles. Each flag is set at most once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BugFlags {
    /// Butterfly quest completed but chest #1 still tracked as unopened.
    pub butterfly: bool,
    /// More conjuration-adjacent chests opened than the game's own
    /// conjuration counter accounts for (the "139/140" bug).
    pub conjuration: bool,
}

/// Chest kinds counted against the conjuration-category counter.
const CONJURATION_CHESTS: [CollectibleKind; 5] = [
    CollectibleKind::MiscConjChest,
    CollectibleKind::ArithmancyChest,
    CollectibleKind::DungeonChest,
    CollectibleKind::ButterflyChest,
    CollectibleKind::VivariumChest,
];

/// Achievement marker present when the butterfly quest has been completed.
const BUTTERFLY_QUEST_MARKER: &str = "COM_11";

/// Mark every catalog entry obtained or missing.
///
/// An entry is collected iff its key appears in the row set of its kind's
/// table. A table that could not be read never claims anything as obtained:
/// its entries stay `collected = false`.
pub fn reconcile(
    catalog: &[Collectible],
    rows: &BTreeMap<LogicalTable, HashSet<String>>,
) -> Vec<Collectible> {
    catalog
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            entry.collected = rows
                .get(&entry.kind.table())
                .is_some_and(|set| set.contains(&entry.key));
            entry
        })
        .collect()
}

/// Evaluate the two corruption heuristics over the annotated catalog.
///
/// Each heuristic only fires when every table it depends on was read
/// successfully; a partially readable save never produces a bug flag from
/// guesswork.
pub fn detect_bugs(
    collectibles: &[Collectible],
    rows: &BTreeMap<LogicalTable, HashSet<String>>,
) -> BugFlags {
    let mut bugs = BugFlags::default();

    let butterfly_readable = [LogicalTable::EconomicExpiry, LogicalTable::PlayerStats]
        .iter()
        .all(|t| rows.contains_key(t));
    if butterfly_readable {
        let quest_complete = rows[&LogicalTable::PlayerStats].contains(BUTTERFLY_QUEST_MARKER);
        let chest_one_missing = collectibles.iter().any(|c| {
            c.kind == CollectibleKind::ButterflyChest && c.index == 1 && !c.collected
        });
        if quest_complete && chest_one_missing {
            log::debug!("butterfly quest marker present with chest #1 unclaimed");
            bugs.butterfly = true;
        }
    }

    let conjuration_readable = [
        LogicalTable::CollectionConjurations,
        LogicalTable::LootDropComponent,
        LogicalTable::EconomicExpiry,
        LogicalTable::MapLocationData,
    ]
    .iter()
    .all(|t| rows.contains_key(t));
    if conjuration_readable {
        let chests_opened = collectibles
            .iter()
            .filter(|c| c.collected && CONJURATION_CHESTS.contains(&c.kind))
            .count();
        let counter = rows[&LogicalTable::CollectionConjurations].len();
        if chests_opened > counter {
            log::debug!("{chests_opened} chests opened against a counter of {counter}");
            bugs.conjuration = true;
        }
    }

    bugs
}
