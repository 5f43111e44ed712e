use tesda_files_catalog::tags::{base_name, derive_tags};

#[test]
fn module_title_with_spaced_hyphen() {
    assert_eq!(derive_tags("Module 1 - Intro.pdf"), vec!["module", "1", "intro"]);
}

#[test]
fn mixed_separators() {
    assert_eq!(derive_tags("a_b-c d.txt"), vec!["a", "b", "c", "d"]);
}

#[test]
fn hidden_file_has_no_tags() {
    assert!(derive_tags(".hidden").is_empty());
}

#[test]
fn only_first_dot_counts() {
    assert_eq!(base_name("archive.tar.gz"), "archive");
    assert_eq!(derive_tags("Lesson_Plan.v2.docx"), vec!["lesson", "plan"]);
}

#[test]
fn name_without_extension() {
    assert_eq!(derive_tags("README"), vec!["readme"]);
}

#[test]
fn separator_runs_collapse() {
    assert_eq!(derive_tags("  Week__3 --  Notes .md"), vec!["week", "3", "notes"]);
}

#[test]
fn duplicates_keep_first_position() {
    assert_eq!(derive_tags("Draft-final-DRAFT.txt"), vec!["draft", "final"]);
}

#[test]
fn unicode_is_lowercased() {
    assert_eq!(derive_tags("Ämter Übersicht.pdf"), vec!["ämter", "übersicht"]);
}

#[test]
fn empty_name() {
    assert!(derive_tags("").is_empty());
    assert!(derive_tags("---.txt").is_empty());
}
