//! End-to-end engine tests: real text pipeline feeding the index
//! builder and query engine.

use std::collections::HashMap;

use recall::core::index::build_index;
use recall::core::search::search;
use recall::core::text::Language;
use recall::core::types::Note;

use crate::common::fixtures::processed_note;

const EN: &[Language] = &[Language::En];

fn notes_map(notes: &[Note]) -> HashMap<String, Note> {
    notes.iter().map(|n| (n.id.clone(), n.clone())).collect()
}

#[test]
fn test_stemmed_query_matches_stemmed_document() {
    let notes = vec![processed_note(
        "apple_1",
        "Morning runs",
        "Running every day keeps me sane",
        EN,
    )];
    let index = build_index(&notes);

    // "runs", "running" and "run" all collapse to the same stem
    for query in ["run", "runs", "running"] {
        let hits = search(query, &index, &notes_map(&notes), EN).unwrap();
        assert_eq!(hits.len(), 1, "query '{query}' should match");
    }
}

#[test]
fn test_stopword_heavy_note_still_matches_content_words() {
    let notes = vec![processed_note(
        "apple_1",
        "Reading list",
        "The art of writing and the craft of editing",
        EN,
    )];
    let index = build_index(&notes);

    let hits = search("writing craft", &index, &notes_map(&notes), EN).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score.coverage, 2);

    // The stopwords themselves never made it into the index
    assert!(!index.contains_stem("the"));
    assert!(!index.contains_stem("and"));
}

#[test]
fn test_phrase_ranking_end_to_end() {
    let notes = vec![
        processed_note("apple_1", "ML intro", "python ai experiments", EN),
        processed_note("apple_2", "Mixed notes", "python scripts and some ai reading", EN),
    ];
    let index = build_index(&notes);

    let hits = search("python ai", &index, &notes_map(&notes), EN).unwrap();

    assert_eq!(hits.len(), 2);
    // Both match both stems, only the adjacent note gets the bonus
    assert_eq!(hits[0].note.id, "apple_1");
    assert!(hits[0].score.phrase_bonus >= 1);
    assert_eq!(hits[1].score.phrase_bonus, 0);
}

#[test]
fn test_title_tokens_are_searchable() {
    let notes = vec![processed_note("apple_1", "Kubernetes cheatsheet", "misc", EN)];
    let index = build_index(&notes);

    let hits = search("kubernetes", &index, &notes_map(&notes), EN).unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_whitelisted_terms_query_roundtrip() {
    let notes = vec![processed_note("apple_1", "Snippets", "useful sql and js tricks", EN)];
    let index = build_index(&notes);

    for query in ["sql", "js"] {
        let hits = search(query, &index, &notes_map(&notes), EN).unwrap();
        assert_eq!(hits.len(), 1, "whitelisted '{query}' should match");
    }
}

#[test]
fn test_multilingual_note_matches_queries_in_both_languages() {
    let languages = &[Language::En, Language::Ru];
    let notes = vec![processed_note(
        "apple_1",
        "Идеи проектов",
        "project ideas про машинное обучение",
        languages,
    )];
    let index = build_index(&notes);
    let map = notes_map(&notes);

    let english = search("project ideas", &index, &map, languages).unwrap();
    assert_eq!(english.len(), 1);

    let russian = search("машинное обучение", &index, &map, languages).unwrap();
    assert_eq!(russian.len(), 1);
    assert!(russian[0].score.coverage >= 2);
}

#[test]
fn test_multilingual_phrase_bonus() {
    let languages = &[Language::En, Language::Ru];
    let notes = vec![processed_note("apple_1", "", "python заметки", languages)];
    let index = build_index(&notes);

    // Each pass emits python@0 followed by its own form of the
    // second word at position 1, so the adjacent pair is found.
    let hits = search("python заметки", &index, &notes_map(&notes), languages).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].score.phrase_bonus >= 1);
}

#[test]
fn test_ranking_is_stable_across_rebuilds() {
    let notes = vec![
        processed_note("apple_3", "c", "rust rust", EN),
        processed_note("apple_1", "a", "rust rust", EN),
        processed_note("apple_2", "b", "rust", EN),
    ];

    let first: Vec<String> = {
        let index = build_index(&notes);
        search("rust", &index, &notes_map(&notes), EN)
            .unwrap()
            .into_iter()
            .map(|h| h.note.id)
            .collect()
    };
    let second: Vec<String> = {
        let index = build_index(&notes);
        search("rust", &index, &notes_map(&notes), EN)
            .unwrap()
            .into_iter()
            .map(|h| h.note.id)
            .collect()
    };

    assert_eq!(first, second);
    // Frequency sorts the doubles first; id breaks their tie
    assert_eq!(first, vec!["apple_1", "apple_3", "apple_2"]);
}

#[test]
fn test_full_scenario_from_raw_text() {
    let notes = vec![
        processed_note("apple_1", "First note", "Python ai", EN),
        processed_note("apple_2", "Second note", "Python with data", EN),
    ];
    let index = build_index(&notes);
    let map = notes_map(&notes);

    // Single-stem query hits both with coverage 1
    let hits = search("python", &index, &map, EN).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.score.coverage == 1));
    assert!(hits.iter().all(|h| h.matched_tokens == vec!["python"]));

    // Two-stem query: the adjacent note wins on the phrase bonus
    let hits = search("python ai", &index, &map, EN).unwrap();
    assert_eq!(hits[0].note.id, "apple_1");
    assert_eq!(hits[0].score.phrase_bonus, 1);
    assert_eq!(hits[1].note.id, "apple_2");
    assert_eq!(hits[1].score.phrase_bonus, 0);
}
