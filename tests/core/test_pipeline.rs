//! Pipeline integration tests: provider export through processing
//! and indexing, persisted into a project and queried back.

use recall::core::config::ProjectConfig;
use recall::core::pipeline::IndexingPipeline;
use recall::core::project::Project;
use recall::core::search::search;
use recall::core::sources::Source;
use recall::core::text::Language;
use tempfile::TempDir;

use crate::common::fixtures::{raw_note, FakeExporter};

fn config(sources: Vec<Source>) -> ProjectConfig {
    ProjectConfig::new(sources, vec![Language::En])
}

#[test]
fn test_pipeline_merges_providers_without_id_collisions() {
    let cfg = config(vec![Source::Apple, Source::Bear]);
    let pipeline = IndexingPipeline::new(&cfg);

    // Both providers use the provider-native id "1"
    let (notes, index, stats) = pipeline
        .run_with_exporters(vec![
            FakeExporter::apple(vec![raw_note("1", "Groceries", "milk eggs")]),
            FakeExporter::bear(vec![raw_note("1", "Standup", "daily sync notes")]),
        ])
        .unwrap();

    assert_eq!(stats.notes_indexed, 2);
    let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["apple_1", "bear_1"]);
    assert_eq!(index.postings("milk").unwrap().len(), 1);
}

#[test]
fn test_pipeline_artifacts_survive_persistence() {
    let temp = TempDir::new().unwrap();
    let cfg = config(vec![Source::Apple]);
    let project = Project::init(temp.path(), cfg.clone()).unwrap();

    let pipeline = IndexingPipeline::new(&cfg);
    let (notes, index, _) = pipeline
        .run_with_exporters(vec![FakeExporter::apple(vec![
            raw_note("1", "Python ai", "experiments"),
            raw_note("2", "Cooking", "pasta recipes"),
        ])])
        .unwrap();

    project.save_artifacts(&notes, &index).unwrap();

    // Reload from disk and query, as the search command does
    let reloaded_index = project.load_index().unwrap();
    let reloaded_notes = project.load_notes_map().unwrap();
    assert_eq!(reloaded_index, index);

    let hits = search("python", &reloaded_index, &reloaded_notes, &cfg.languages).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].note.id, "apple_1");
}

#[test]
fn test_rebuild_from_same_data_is_equivalent() {
    let cfg = config(vec![Source::Apple]);
    let pipeline = IndexingPipeline::new(&cfg);
    let notes = vec![
        raw_note("1", "First", "python ai"),
        raw_note("2", "Second", "python with data"),
    ];

    let (_, first, _) = pipeline
        .run_with_exporters(vec![FakeExporter::apple(notes.clone())])
        .unwrap();
    let (_, second, _) = pipeline
        .run_with_exporters(vec![FakeExporter::apple(notes)])
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_providers_produce_valid_empty_project() {
    let temp = TempDir::new().unwrap();
    let cfg = config(vec![Source::Apple]);
    let project = Project::init(temp.path(), cfg.clone()).unwrap();

    let (notes, index, stats) = IndexingPipeline::new(&cfg)
        .run_with_exporters(vec![FakeExporter::apple(vec![])])
        .unwrap();
    project.save_artifacts(&notes, &index).unwrap();

    assert_eq!(stats.notes_indexed, 0);

    let hits = search(
        "anything",
        &project.load_index().unwrap(),
        &project.load_notes_map().unwrap(),
        &cfg.languages,
    )
    .unwrap();
    assert!(hits.is_empty());

    let project_stats = project.stats().unwrap();
    assert_eq!(project_stats.notes_count, 0);
    assert_eq!(project_stats.unique_stems, 0);
}
