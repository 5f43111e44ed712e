use tesda_files_catalog::{NewFile, RecordFilter};
use tesda_files_db::*;

fn setup_db() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    insert_file_at(
        &conn,
        &NewFile::new("Report.pdf", "application/pdf", b"%PDF-1.7".to_vec()),
        "2024-01-01T08:00:00.000Z",
    )
    .unwrap();
    insert_file_at(
        &conn,
        &NewFile::new("Summary.docx", "", vec![0x50, 0x4b, 0x03, 0x04]),
        "2024-01-02T08:00:00.000Z",
    )
    .unwrap();
    insert_file_at(
        &conn,
        &NewFile::new("Module 1 - Intro.pdf", "application/pdf", b"intro".to_vec()),
        "2024-01-03T08:00:00.000Z",
    )
    .unwrap();
    conn
}

fn names(records: &[tesda_files_catalog::FileRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn unfiltered_list_is_newest_first() {
    let conn = setup_db();
    let records = list_files(&conn, &RecordFilter::all()).unwrap();
    assert_eq!(
        names(&records),
        vec!["Module 1 - Intro.pdf", "Summary.docx", "Report.pdf"]
    );
}

#[test]
fn list_round_trips_payload() {
    let conn = setup_db();
    let records = list_files(&conn, &RecordFilter::all()).unwrap();
    let summary = records.iter().find(|r| r.name == "Summary.docx").unwrap();
    assert_eq!(summary.mime_type, "");
    assert_eq!(summary.size, 4);
    assert_eq!(summary.blob, vec![0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(summary.tags, vec!["summary"]);
    assert_eq!(summary.created, "2024-01-02T08:00:00.000Z");
}

#[test]
fn equal_timestamps_fall_back_to_reverse_insertion() {
    let conn = open_memory().unwrap();
    let stamp = "2024-05-05T05:05:05.555Z";
    for name in ["first.txt", "second.txt", "third.txt"] {
        insert_file_at(&conn, &NewFile::new(name, "text/plain", vec![]), stamp).unwrap();
    }
    let records = list_files(&conn, &RecordFilter::all()).unwrap();
    assert_eq!(names(&records), vec!["third.txt", "second.txt", "first.txt"]);
}

#[test]
fn filter_by_name_substring() {
    let conn = setup_db();
    let records = list_files(&conn, &RecordFilter::from("rep")).unwrap();
    assert_eq!(names(&records), vec!["Report.pdf"]);
}

#[test]
fn empty_filter_returns_everything() {
    let conn = setup_db();
    assert_eq!(list_files(&conn, &RecordFilter::from("")).unwrap().len(), 3);
    assert_eq!(list_files(&conn, &RecordFilter::new(None)).unwrap().len(), 3);
}

#[test]
fn filter_matches_joined_tags() {
    let conn = setup_db();
    // "1 intro" only appears in the space-joined tags, not in the name.
    let records = list_files(&conn, &RecordFilter::from("1 intro")).unwrap();
    assert_eq!(names(&records), vec!["Module 1 - Intro.pdf"]);
}

#[test]
fn filter_without_matches_is_empty() {
    let conn = setup_db();
    assert!(list_files(&conn, &RecordFilter::from("zzz")).unwrap().is_empty());
}

#[test]
fn summaries_follow_same_order_and_filter() {
    let conn = setup_db();
    let all = list_summaries(&conn, &RecordFilter::all()).unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(all[0].tags, vec!["module", "1", "intro"]);

    let pdfs = list_summaries(&conn, &RecordFilter::from(".PDF")).unwrap();
    assert_eq!(pdfs.len(), 2);
}

#[test]
fn find_by_exact_tag() {
    let conn = setup_db();
    let found = find_files_by_tag(&conn, "Module").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Module 1 - Intro.pdf");
    assert_eq!(found[0].tags, vec!["module", "1", "intro"]);

    // Tag lookup is equality, not substring.
    assert!(find_files_by_tag(&conn, "mod").unwrap().is_empty());
}

#[test]
fn get_file_by_id() {
    let conn = setup_db();
    let record = get_file(&conn, 1).unwrap().unwrap();
    assert_eq!(record.name, "Report.pdf");
    assert_eq!(record.blob, b"%PDF-1.7");
    assert_eq!(record.tags, vec!["report"]);

    assert!(get_file(&conn, 99).unwrap().is_none());
}

#[test]
fn stats_count_and_total() {
    let conn = setup_db();
    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(stats.records, 3);
    assert_eq!(stats.total_bytes, 8 + 4 + 5);

    let empty = open_memory().unwrap();
    let stats = catalog_stats(&empty).unwrap();
    assert_eq!(stats.records, 0);
    assert_eq!(stats.total_bytes, 0);
}

#[test]
fn deleted_records_leave_listing() {
    let conn = setup_db();
    delete_file(&conn, 2).unwrap();
    let records = list_files(&conn, &RecordFilter::all()).unwrap();
    assert_eq!(names(&records), vec!["Module 1 - Intro.pdf", "Report.pdf"]);
}
