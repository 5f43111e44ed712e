use tesda_files_db::schema::{
    create_schema, destroy_database, get_schema_version, open_database, CURRENT_VERSION,
};
use tesda_files_db::{open_memory, SchemaError};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_and_indexes_exist() {
    let conn = open_memory().unwrap();
    let objects = [
        ("table", "schema_version"),
        ("table", "files"),
        ("table", "file_tags"),
        ("index", "idx_files_name"),
        ("index", "idx_files_created"),
        ("index", "idx_file_tags_tag"),
    ];
    for (kind, name) in objects {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type=?1 AND name=?2)",
                [kind, name],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "{kind} '{name}' should exist");
    }
}

#[test]
fn reopen_existing_file_skips_creation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tesda_files_db.sqlite");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO files (name, size, blob, created) VALUES ('a.txt', 1, x'61', '2024-01-01T00:00:00.000Z')",
            [],
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    let versions: i32 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(versions, 1);
}

#[test]
fn newer_schema_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {other:?}"),
    }
}

#[test]
fn corrupt_container_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite");
    std::fs::write(&path, b"this is definitely not a sqlite database file").unwrap();
    assert!(open_database(&path).is_err());
}

#[test]
fn destroy_removes_container_and_side_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite");
    drop(open_database(&path).unwrap());
    assert!(path.exists());

    destroy_database(&path).unwrap();
    assert!(!path.exists());
    assert!(!dir.path().join("catalog.sqlite-wal").exists());
    assert!(!dir.path().join("catalog.sqlite-shm").exists());

    // Destroying a missing container is fine.
    destroy_database(&path).unwrap();
}

#[test]
fn destroy_keeps_container_when_side_file_removal_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite");
    std::fs::write(&path, b"").unwrap();
    // A directory in place of the WAL cannot be removed with remove_file.
    std::fs::create_dir(dir.path().join("catalog.sqlite-wal")).unwrap();

    let result = destroy_database(&path);
    assert!(matches!(result, Err(SchemaError::Io { .. })));
    assert!(path.exists());
}
