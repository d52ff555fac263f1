//! Stats command tests

use recall::cli::commands::stats::{execute, StatsArgs};
use recall::cli::OutputFormat;
use recall::core::text::Language;

use crate::common::fixtures::TestProject;

#[test]
fn test_stats_human_output() {
    let tp = TestProject::english(&[("apple_1", "First", "python ai")]);

    execute(StatsArgs::default(), &tp.project, OutputFormat::Human).unwrap();
}

#[test]
fn test_stats_json_output() {
    let tp = TestProject::with_languages(
        &[("apple_1", "First", "python ai")],
        &[Language::En, Language::Es],
    );

    execute(StatsArgs::default(), &tp.project, OutputFormat::Json).unwrap();
}

#[test]
fn test_stats_counts_match_collection() {
    let tp = TestProject::english(&[
        ("apple_1", "First", "python ai"),
        ("apple_2", "Second", "rust"),
    ]);

    let stats = tp.project.stats().unwrap();
    assert_eq!(stats.notes_count, 2);
    assert!(stats.unique_stems >= 3);
}

#[test]
fn test_stats_without_snapshots_fails() {
    let tp = TestProject::english(&[("apple_1", "First", "python")]);
    std::fs::remove_file(tp.project.paths().notes_snapshot()).unwrap();

    let result = execute(StatsArgs::default(), &tp.project, OutputFormat::Human);
    assert!(result.is_err());
}
