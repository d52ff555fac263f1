//! Inverted index construction.
//!
//! The index maps each stem to the notes containing it and the
//! positions where it occurred. It is a pure derived artifact:
//! rebuilding from the same processed-note collection always
//! yields equivalent content. Rebuilds are wholesale; there is no
//! incremental mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::types::Note;

/// Position list for one stem within one note
pub type PostingList = Vec<usize>;

/// Inverted index: stem → note id → ascending position list.
///
/// Position lists are never empty: a stem is only inserted when it
/// occurred. Insertion order (document enumeration order, then
/// token order) is preserved, which is itself ascending-by-position
/// order within each language pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: HashMap<String, HashMap<String, PostingList>>,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `stem` in note `note_id` at
    /// `position`, creating the nested containers on first use.
    pub fn add_occurrence(&mut self, stem: &str, note_id: &str, position: usize) {
        self.postings
            .entry(stem.to_string())
            .or_default()
            .entry(note_id.to_string())
            .or_default()
            .push(position);
    }

    /// Notes and positions for a stem, if any note contains it
    pub fn postings(&self, stem: &str) -> Option<&HashMap<String, PostingList>> {
        self.postings.get(stem)
    }

    /// Whether any note contains this stem
    pub fn contains_stem(&self, stem: &str) -> bool {
        self.postings.contains_key(stem)
    }

    /// Number of distinct stems in the index
    pub fn unique_stems(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no stems at all
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Build an inverted index from a processed note collection.
///
/// Every `(stem, position)` pair of every note is appended in
/// enumeration order. No sorting or deduplication is performed.
/// Zero notes yield an empty index, not an error.
pub fn build_index(notes: &[Note]) -> InvertedIndex {
    let mut index = InvertedIndex::new();

    for note in notes {
        for token in &note.tokens {
            index.add_occurrence(&token.stem, &note.id, token.position);
        }
    }

    tracing::debug!(
        "Built index: {} unique stems over {} notes",
        index.unique_stems(),
        notes.len()
    );

    index
}
