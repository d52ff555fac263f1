//! Query engine: candidate collection, scoring and ranking.
//!
//! A query runs through the same text pipeline as documents, then
//! every note containing at least one query stem becomes a
//! candidate. Candidates are scored by a (coverage, frequency,
//! phrase bonus) triple compared lexicographically, with note id
//! as the final deterministic tie-break.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::core::error::{RecallError, Result};
use crate::core::index::InvertedIndex;
use crate::core::text::{prepare_for_query, Language};
use crate::core::types::{Note, PhraseMatch, Score, SearchHit};

/// Per-candidate accumulator while walking the index
#[derive(Default)]
struct Candidate {
    matched: HashSet<String>,
    positions_by_stem: HashMap<String, Vec<usize>>,
}

/// Execute a search over a built index.
///
/// The query is normalized with the same active profiles that
/// built the index (callers must persist and restore that set
/// together with the snapshots; a mismatch is not detected here).
/// An empty query, or one composed entirely of stopwords, yields
/// an empty result list rather than an error. The full ranked
/// candidate set is returned; callers cap it for display.
pub fn search(
    query: &str,
    index: &InvertedIndex,
    notes: &HashMap<String, Note>,
    languages: &[Language],
) -> Result<Vec<SearchHit>> {
    let start = Instant::now();

    let query_stems = prepare_for_query(query, languages);
    if query_stems.is_empty() {
        return Ok(Vec::new());
    }

    // Candidate collection: every note under any query stem.
    // Duplicate query stems extend position lists again, which is
    // what makes repeated query words count double in frequency.
    let mut candidates: HashMap<String, Candidate> = HashMap::new();
    for stem in &query_stems {
        let Some(postings) = index.postings(stem) else {
            continue;
        };
        for (note_id, positions) in postings {
            let candidate = candidates.entry(note_id.clone()).or_default();
            candidate.matched.insert(stem.clone());
            candidate
                .positions_by_stem
                .entry(stem.clone())
                .or_default()
                .extend(positions.iter().copied());
        }
    }

    let max_coverage = candidates
        .values()
        .map(|c| c.matched.len())
        .max()
        .unwrap_or(0);

    // Adjacent pairs over the query's own token order, regardless
    // of which language pass produced each stem.
    let pairs: Vec<(&String, &String)> = query_stems
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .collect();

    let mut hits = Vec::with_capacity(candidates.len());
    for (note_id, candidate) in candidates {
        let note = notes.get(&note_id).ok_or_else(|| {
            RecallError::SnapshotCorrupt(format!(
                "note '{note_id}' is present in the index but missing from the notes snapshot"
            ))
        })?;

        let coverage = candidate.matched.len();
        let frequency: usize = candidate.positions_by_stem.values().map(Vec::len).sum();

        let mut phrase_matches = Vec::new();
        for (first, second) in &pairs {
            let (Some(first_positions), Some(second_positions)) = (
                candidate.positions_by_stem.get(*first),
                candidate.positions_by_stem.get(*second),
            ) else {
                continue;
            };
            for &position in first_positions {
                if second_positions.contains(&(position + 1)) {
                    phrase_matches.push(PhraseMatch {
                        first: (*first).clone(),
                        second: (*second).clone(),
                        position,
                    });
                }
            }
        }

        let matched_tokens: Vec<String> = query_stems
            .iter()
            .filter(|stem| candidate.matched.contains(*stem))
            .cloned()
            .collect();

        hits.push(SearchHit {
            note: note.clone(),
            score: Score {
                coverage,
                frequency,
                phrase_bonus: phrase_matches.len(),
            },
            matched_tokens,
            phrase_matches,
            max_coverage,
        });
    }

    // Score descending; note id ascending keeps equal-score runs
    // deterministic across data-structure iteration orders.
    hits.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.note.id.cmp(&b.note.id))
    });

    tracing::debug!(
        "Query '{}' matched {} notes in {}ms",
        query,
        hits.len(),
        start.elapsed().as_millis()
    );

    Ok(hits)
}
