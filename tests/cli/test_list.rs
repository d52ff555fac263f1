//! List command tests

use recall::cli::commands::list::{execute, ListArgs};
use recall::cli::OutputFormat;

use crate::common::fixtures::TestProject;

#[test]
fn test_list_human_output() {
    let tp = TestProject::english(&[
        ("apple_1", "First note", "python"),
        ("apple_2", "Second note", "rust"),
    ]);

    execute(ListArgs::default(), &tp.project, OutputFormat::Human).unwrap();
}

#[test]
fn test_list_json_output() {
    let tp = TestProject::english(&[("apple_1", "First note", "python")]);

    execute(ListArgs::default(), &tp.project, OutputFormat::Json).unwrap();
}

#[test]
fn test_list_without_notes_snapshot_fails() {
    let tp = TestProject::english(&[("apple_1", "First note", "python")]);
    std::fs::remove_file(tp.project.paths().notes_snapshot()).unwrap();

    let result = execute(ListArgs::default(), &tp.project, OutputFormat::Human);
    assert!(result.is_err());
}
