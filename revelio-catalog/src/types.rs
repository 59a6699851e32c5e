//! Data model types for the collectible catalog.

use revelio_core::LogicalTable;
use serde::{Deserialize, Deserializer, Serialize};

// ── Collectible kind ────────────────────────────────────────────────────────

/// Discriminant for a catalog entry. Determines which logical table holds
/// the entry's obtained-state and how the entry is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Revelio,
    Merlin,
    VivariumChest,
    ButterflyChest,
    Moth,
    Brazier,
    Statue,
    DaedalianKey,
    Flying,
    ArithmancyChest,
    MiscConjChest,
    MiscWandChest,
    DungeonChest,
    CampChest,
    Demiguise,
    Astronomy,
    Landing,
    Balloon,
    AncientMagic,
    Foe,
    FinishingTouchEnemy,
}

impl CollectibleKind {
    /// The logical table whose row set decides whether an entry of this
    /// kind has been obtained. Total by construction: every kind maps to
    /// exactly one table.
    pub fn table(self) -> LogicalTable {
        match self {
            CollectibleKind::Revelio => LogicalTable::Collection,
            CollectibleKind::Merlin => LogicalTable::SphinxPuzzle,
            CollectibleKind::VivariumChest => LogicalTable::LootDropComponent,
            CollectibleKind::ButterflyChest => LogicalTable::EconomicExpiry,
            CollectibleKind::Moth
            | CollectibleKind::Brazier
            | CollectibleKind::Statue
            | CollectibleKind::DaedalianKey => LogicalTable::MiscData,
            CollectibleKind::Flying
            | CollectibleKind::ArithmancyChest
            | CollectibleKind::MiscConjChest
            | CollectibleKind::MiscWandChest
            | CollectibleKind::DungeonChest
            | CollectibleKind::CampChest
            | CollectibleKind::Demiguise
            | CollectibleKind::Astronomy
            | CollectibleKind::Landing
            | CollectibleKind::Balloon
            | CollectibleKind::AncientMagic
            | CollectibleKind::Foe => LogicalTable::MapLocationData,
            CollectibleKind::FinishingTouchEnemy => LogicalTable::Achievement,
        }
    }

    /// Display-name pair: the category name and an optional qualifier shown
    /// in parentheses (empty when there is none).
    pub fn display_names(self) -> (&'static str, &'static str) {
        match self {
            CollectibleKind::Revelio => ("Field guide page", "Revelio"),
            CollectibleKind::Merlin => ("Merlin Trial", ""),
            CollectibleKind::VivariumChest => ("Collection Chest", "Vivarium"),
            CollectibleKind::ButterflyChest => ("Butterfly Chest", ""),
            CollectibleKind::Moth => ("Field guide page", "Moth painting"),
            CollectibleKind::Brazier => ("Field guide page", "Confringo brazier"),
            CollectibleKind::Statue => ("Field guide page", "Levioso statue"),
            CollectibleKind::DaedalianKey => ("Daedalian Key", ""),
            CollectibleKind::Flying => ("Field guide page", "Flying"),
            CollectibleKind::ArithmancyChest => ("Collection Chest", "Arithmancy door"),
            CollectibleKind::MiscConjChest => ("Collection Chest", ""),
            CollectibleKind::MiscWandChest => ("Collection Chest", ""),
            CollectibleKind::DungeonChest => ("Collection Chest", "Dungeon"),
            CollectibleKind::CampChest => ("Collection Chest", "Bandit camp"),
            CollectibleKind::Demiguise => ("Demiguise Moon", ""),
            CollectibleKind::Astronomy => ("Astronomy Table", ""),
            CollectibleKind::Landing => ("Landing Platform", ""),
            CollectibleKind::Balloon => ("Balloon Set", ""),
            CollectibleKind::AncientMagic => ("Ancient Magic Hotspot", ""),
            CollectibleKind::Foe => ("Infamous Foe", ""),
            CollectibleKind::FinishingTouchEnemy => ("Finishing Touch Enemy", ""),
        }
    }

    /// Stable identifier matching the dataset's `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            CollectibleKind::Revelio => "Revelio",
            CollectibleKind::Merlin => "Merlin",
            CollectibleKind::VivariumChest => "VivariumChest",
            CollectibleKind::ButterflyChest => "ButterflyChest",
            CollectibleKind::Moth => "Moth",
            CollectibleKind::Brazier => "Brazier",
            CollectibleKind::Statue => "Statue",
            CollectibleKind::DaedalianKey => "DaedalianKey",
            CollectibleKind::Flying => "Flying",
            CollectibleKind::ArithmancyChest => "ArithmancyChest",
            CollectibleKind::MiscConjChest => "MiscConjChest",
            CollectibleKind::MiscWandChest => "MiscWandChest",
            CollectibleKind::DungeonChest => "DungeonChest",
            CollectibleKind::CampChest => "CampChest",
            CollectibleKind::Demiguise => "Demiguise",
            CollectibleKind::Astronomy => "Astronomy",
            CollectibleKind::Landing => "Landing",
            CollectibleKind::Balloon => "Balloon",
            CollectibleKind::AncientMagic => "AncientMagic",
            CollectibleKind::Foe => "Foe",
            CollectibleKind::FinishingTouchEnemy => "FinishingTouchEnemy",
        }
    }
}

// ── Collectible ─────────────────────────────────────────────────────────────

/// One entry of the static collectible catalog.
///
/// Everything but `collected` comes verbatim from the reference dataset and
/// is immutable for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    #[serde(rename = "type")]
    pub kind: CollectibleKind,
    /// Ordinal within the kind, unique per kind.
    pub index: u32,
    /// Identifier expected in the kind's row set when obtained.
    #[serde(deserialize_with = "key_as_string")]
    pub key: String,
    /// Display grouping.
    pub region: String,
    /// Guide video id, when one exists.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub video: Option<String>,
    /// Timestamp (seconds) into the guide video.
    #[serde(default)]
    pub time: Option<u32>,
    /// Set by the reconciliation engine; never present in the dataset.
    #[serde(skip)]
    pub collected: bool,
}

/// Dataset keys are identifiers but a few are written as bare numbers;
/// normalize everything to a string so row-set membership lines up.
fn key_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Number(i64),
    }
    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(s) => s,
        RawKey::Number(n) => n.to_string(),
    })
}

/// The dataset writes "no video" as an empty string.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// ── Regions ─────────────────────────────────────────────────────────────────

/// Zone a display region belongs to, for grouping in the report. Regions
/// outside any zone (and unknown regions) return the empty string.
pub fn region_group(region: &str) -> &'static str {
    match region {
        "The Library Annex"
        | "The Astronomy Wing"
        | "The Bell Tower Wing"
        | "The South Wing"
        | "The Great Hall"
        | "The Grand Staircase"
        | "Vivariums" => "Hogwarts",
        "North Ford Bog"
        | "Forbidden Forest"
        | "North Hogwarts Region"
        | "Hogsmeade Valley"
        | "South Hogwarts Region"
        | "Hogwarts Valley"
        | "Feldcroft Region"
        | "South Sea Bog"
        | "Coastal Cavern"
        | "Poidsear Coast"
        | "Marunweem Lake"
        | "Manor Cape"
        | "Cragcroftshire"
        | "Clagmar Coast" => "The Highlands",
        "Finishing Touches" => "Achievements",
        _ => "",
    }
}
