//! Core data types for recall.
//!
//! This module defines the data structures shared across the
//! engine: processed notes with their stemmed tokens, the ranking
//! score triple, and search results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::sources::Source;
use crate::core::text::Language;

/// A stemmed token with its position inside one language pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Normalized root form produced by the stemmer
    pub stem: String,

    /// 0-based position within the emitting language pass
    pub position: usize,
}

/// A processed note, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Globally unique id, qualified as `{source}_{provider id}`
    pub id: String,

    /// Provider the note came from
    pub source: Source,

    /// Note title
    pub title: String,

    /// Raw note body
    pub body: String,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,

    /// Last modification timestamp (UTC)
    pub modified: DateTime<Utc>,

    /// Stemmed tokens over title + body, one stream per active
    /// language profile
    pub tokens: Vec<Token>,
}

impl Note {
    /// The provider-native id, without the source qualifier
    pub fn provider_id(&self) -> &str {
        self.id
            .split_once('_')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.id)
    }
}

/// Three-part relevance score, compared lexicographically.
///
/// Coverage dominates; frequency breaks coverage ties; the phrase
/// bonus breaks the rest. The derived ordering relies on field
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    /// Distinct query stems matched
    pub coverage: usize,

    /// Total stem occurrences across all matched stems
    pub frequency: usize,

    /// Adjacent query-stem pairs found at adjacent positions
    pub phrase_bonus: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.coverage, self.frequency, self.phrase_bonus
        )
    }
}

/// A phrase hit: two query-adjacent stems found at adjacent
/// positions in a candidate note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    /// Earlier stem of the pair
    pub first: String,

    /// Later stem of the pair
    pub second: String,

    /// Position of the earlier stem
    pub position: usize,
}

/// A single ranked search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched note
    pub note: Note,

    /// Relevance score triple
    pub score: Score,

    /// Query stems present in the note, in query order
    pub matched_tokens: Vec<String>,

    /// Adjacent-stem hits
    pub phrase_matches: Vec<PhraseMatch>,

    /// Best coverage across all results of this query, for
    /// relative display
    pub max_coverage: usize,
}

/// Statistics from one indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Notes received from providers
    pub notes_exported: usize,

    /// Notes that made it into the index
    pub notes_indexed: usize,

    /// Distinct stems in the built index
    pub unique_stems: usize,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}

/// Project-level statistics for display
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStats {
    /// Indexed note count
    pub notes_count: usize,

    /// Configured providers
    pub sources: Vec<Source>,

    /// Configured language profiles
    pub languages: Vec<Language>,

    /// Distinct stems in the index
    pub unique_stems: usize,

    /// When the index was last rebuilt
    pub last_indexed_at: DateTime<Utc>,

    /// Project root directory
    pub project_root: PathBuf,
}
