#![allow(deprecated)] // cargo_bin is deprecated but still functional

use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn tesda(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tesda-files").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").arg("--db").arg(db);
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn list_json(db: &Path, filter: Option<&str>) -> Vec<serde_json::Value> {
    let mut cmd = tesda(db);
    cmd.arg("list").arg("--json");
    if let Some(f) = filter {
        cmd.arg(f);
    }
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn add_then_search() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    let report = write(&temp, "Report.pdf", b"%PDF-1.7");
    let summary = write(&temp, "Summary.docx", b"PK\x03\x04");

    tesda(&db)
        .arg("add")
        .arg(&report)
        .arg(&summary)
        .assert()
        .success()
        .stdout(contains("Added #1 Report.pdf"))
        .stdout(contains("Added #2 Summary.docx"));

    let all = list_json(&db, None);
    let names: Vec<&str> = all.iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Summary.docx", "Report.pdf"]);
    assert_eq!(all[1]["mime_type"], "application/pdf");
    assert_eq!(all[1]["size"], 8);

    let rep = list_json(&db, Some("rep"));
    assert_eq!(rep.len(), 1);
    assert_eq!(rep[0]["name"], "Report.pdf");
}

#[test]
fn add_reports_missing_files_but_keeps_others() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    let good = write(&temp, "notes.txt", b"hello");

    tesda(&db)
        .arg("add")
        .arg(&good)
        .arg(temp.path().join("missing.txt"))
        .assert()
        .failure()
        .stdout(contains("Failed to add"));

    assert_eq!(list_json(&db, None).len(), 1);
}

#[test]
fn empty_catalog_lists_nothing() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    tesda(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No files found."));
}

#[test]
fn export_data_uri_and_file() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    let notes = write(&temp, "notes.txt", b"hi");
    tesda(&db).arg("add").arg(&notes).assert().success();

    tesda(&db)
        .args(["export", "1", "--data-uri"])
        .assert()
        .success()
        .stdout(contains("data:text/plain;base64,aGk="));

    let out = temp.path().join("copy.txt");
    tesda(&db)
        .args(["export", "1", "-o"])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(std::fs::read(&out).unwrap(), b"hi");

    // Refuses to overwrite without --force.
    tesda(&db)
        .args(["export", "1", "-o"])
        .arg(&out)
        .assert()
        .failure();
}

#[test]
fn show_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    tesda(&db)
        .args(["show", "42"])
        .assert()
        .failure()
        .stdout(contains("No file with id 42"));
}

#[test]
fn delete_requires_confirmation_and_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    let notes = write(&temp, "notes.txt", b"hello");
    tesda(&db).arg("add").arg(&notes).assert().success();

    tesda(&db).args(["delete", "1"]).assert().success();
    assert_eq!(list_json(&db, None).len(), 1);

    tesda(&db).args(["delete", "1", "--yes"]).assert().success();
    assert!(list_json(&db, None).is_empty());

    tesda(&db).args(["delete", "1", "--yes"]).assert().success();
}

#[test]
fn wipe_resets_catalog_and_ids() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");
    let a = write(&temp, "a.txt", b"a");
    let b = write(&temp, "b.txt", b"b");
    tesda(&db).arg("add").arg(&a).arg(&b).assert().success();

    tesda(&db)
        .arg("wipe")
        .assert()
        .success()
        .stdout(contains("--yes"));
    assert_eq!(list_json(&db, None).len(), 2);

    tesda(&db).args(["wipe", "--yes"]).assert().success();
    assert!(list_json(&db, None).is_empty());

    tesda(&db)
        .arg("add")
        .arg(&b)
        .assert()
        .success()
        .stdout(contains("Added #1 b.txt"));
}

#[test]
fn wipe_preview_does_not_create_catalog() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("catalog.sqlite");

    tesda(&db)
        .arg("wipe")
        .assert()
        .success()
        .stdout(contains("Nothing to wipe."));
    assert!(!db.exists());
}
