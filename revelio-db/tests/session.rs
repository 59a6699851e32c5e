use std::collections::HashSet;

use rusqlite::Connection;

use revelio_core::LogicalTable;
use revelio_db::SaveSession;

/// Build a database image by letting `populate` fill a real SQLite file,
/// then reading the file bytes back.
fn build_image(populate: impl FnOnce(&Connection)) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.db");
    {
        let conn = Connection::open(&path).unwrap();
        populate(&conn);
    }
    std::fs::read(&path).unwrap()
}

/// Create every physical table the query set touches, without rows.
fn create_full_schema(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE CollectionDynamic (
            ItemID TEXT, ItemState TEXT, SubcategoryID TEXT, CategoryID TEXT
         );
         CREATE TABLE SphinxPuzzleDynamic (SphinxPuzzleGUID TEXT, EInteractiveState INTEGER);
         CREATE TABLE LootDropComponentDynamic (LootGroup TEXT);
         CREATE TABLE EconomicExpiryDynamic (UniqueID TEXT);
         CREATE TABLE MiscDataDynamic (DataName TEXT, DataValue TEXT);
         CREATE TABLE MapLocationDataDynamic (MapLocationID TEXT, State INTEGER);
         CREATE TABLE AchievementDynamic (AchievementID TEXT, OneOfEach TEXT);
         CREATE TABLE PlayerStatsDynamic (ActivityName TEXT, ActivityValue TEXT);",
    )
    .unwrap();
}

fn set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn fetches_all_tables_from_full_schema() {
    let image = build_image(|conn| {
        create_full_schema(conn);
        conn.execute_batch(
            "INSERT INTO CollectionDynamic VALUES
                ('page-1', 'Obtained', 'Hogwarts', 'FieldGuide'),
                ('page-2', 'Locked', 'Hogwarts', 'FieldGuide'),
                ('conj-1', 'Obtained', 'Exploration', 'Conjurations');
             INSERT INTO SphinxPuzzleDynamic VALUES
                ('guid-done', 34),
                ('guid-pending', 2);
             INSERT INTO MiscDataDynamic VALUES
                ('brazier-1', '1'),
                ('brazier-2', '0');
             INSERT INTO PlayerStatsDynamic VALUES
                ('COM_11', 'Complete'),
                ('COM_12', 'InProgress');",
        )
        .unwrap();
    });

    let session = SaveSession::open(&image).unwrap();
    let data = session.fetch_all();

    assert!(data.errors.is_empty());
    assert_eq!(data.rows.len(), 9);
    assert_eq!(
        data.rows[&LogicalTable::Collection],
        set(&["page-1", "conj-1"])
    );
    assert_eq!(
        data.rows[&LogicalTable::CollectionConjurations],
        set(&["conj-1"])
    );
    assert_eq!(data.rows[&LogicalTable::SphinxPuzzle], set(&["guid-done"]));
    assert_eq!(data.rows[&LogicalTable::MiscData], set(&["brazier-1"]));
    assert_eq!(data.rows[&LogicalTable::PlayerStats], set(&["COM_11"]));
    assert!(data.rows[&LogicalTable::EconomicExpiry].is_empty());
}

#[test]
fn achievement_rows_split_on_commas() {
    let image = build_image(|conn| {
        create_full_schema(conn);
        conn.execute_batch(
            "INSERT INTO AchievementDynamic VALUES ('PFA_43', 'PFA_1,PFA_2,');",
        )
        .unwrap();
    });

    let session = SaveSession::open(&image).unwrap();
    let rows = session.fetch_table(LogicalTable::Achievement).unwrap();
    // Trailing empty segment is discarded.
    assert_eq!(rows, set(&["PFA_1", "PFA_2"]));
}

#[test]
fn duplicate_values_collapse() {
    let image = build_image(|conn| {
        create_full_schema(conn);
        conn.execute_batch(
            "INSERT INTO LootDropComponentDynamic VALUES ('viv-1'), ('viv-1'), ('viv-2');",
        )
        .unwrap();
    });

    let session = SaveSession::open(&image).unwrap();
    let rows = session.fetch_table(LogicalTable::LootDropComponent).unwrap();
    assert_eq!(rows, set(&["viv-1", "viv-2"]));
}

#[test]
fn numeric_identifiers_are_stringified() {
    let image = build_image(|conn| {
        create_full_schema(conn);
        conn.execute_batch(
            "INSERT INTO MapLocationDataDynamic VALUES (2839767, 11), ('cm-1', 11), ('cm-2', 3);",
        )
        .unwrap();
    });

    let session = SaveSession::open(&image).unwrap();
    let rows = session.fetch_table(LogicalTable::MapLocationData).unwrap();
    assert_eq!(rows, set(&["2839767", "cm-1"]));
}

#[test]
fn missing_table_is_a_per_table_error() {
    let image = build_image(|conn| {
        create_full_schema(conn);
        conn.execute_batch("DROP TABLE SphinxPuzzleDynamic;").unwrap();
    });

    let session = SaveSession::open(&image).unwrap();
    let err = session.fetch_table(LogicalTable::SphinxPuzzle).unwrap_err();
    assert_eq!(err.table, LogicalTable::SphinxPuzzle);

    // The rest of the batch is unaffected.
    let data = session.fetch_all();
    assert_eq!(data.rows.len(), 8);
    assert_eq!(data.errors.len(), 1);
    assert_eq!(data.errors[0].table, LogicalTable::SphinxPuzzle);
}

#[test]
fn every_table_missing_leaves_empty_batch() {
    // A valid but unrelated database: opens fine, every query fails.
    let image = build_image(|conn| {
        conn.execute_batch("CREATE TABLE Unrelated (x TEXT);").unwrap();
    });

    let session = SaveSession::open(&image).unwrap();
    let data = session.fetch_all();
    assert!(data.is_empty());
    assert_eq!(data.errors.len(), 9);
}

#[test]
fn garbage_image_fails_to_open() {
    let image = vec![0xDE; 4096];
    assert!(SaveSession::open(&image).is_err());
}

#[test]
fn empty_image_fails_to_open() {
    // SQLite treats a zero-length file as a valid empty database, so the
    // failure shows up later as nine per-table errors, not at open.
    match SaveSession::open(&[]) {
        Ok(session) => {
            let data = session.fetch_all();
            assert!(data.is_empty());
        }
        Err(_) => {} // also acceptable: engine-level rejection
    }
}
