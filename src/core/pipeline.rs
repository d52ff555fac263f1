//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Export raw notes from every configured provider
//! 2. Process notes (parse timestamps, tokenize per profile)
//! 3. Build the inverted index
//!
//! Persistence is the caller's job: on any failure here no new
//! artifacts exist, so the previous snapshots stay valid.

use chrono::NaiveDateTime;
use std::time::Instant;

use crate::core::config::ProjectConfig;
use crate::core::error::Result;
use crate::core::index::{build_index, InvertedIndex};
use crate::core::sources::{exporter_for, NoteExporter, RawNote, Source};
use crate::core::text::{prepare_for_index, Language};
use crate::core::types::{IndexStats, Note};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw note tagged with the provider it came from
struct SourcedNote {
    source: Source,
    raw: RawNote,
}

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    sources: Vec<Source>,
    languages: Vec<Language>,
}

impl IndexingPipeline {
    /// Create a pipeline from project configuration
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            sources: config.sources.clone(),
            languages: config.languages.clone(),
        }
    }

    /// Run the full pipeline against the configured providers
    pub fn run(&self) -> Result<(Vec<Note>, InvertedIndex, IndexStats)> {
        let exporters = self.sources.iter().map(|s| exporter_for(*s)).collect();
        self.run_with_exporters(exporters)
    }

    /// Run the full pipeline with explicit exporters.
    ///
    /// Any exporter failure aborts the whole run: there is no
    /// partially built index.
    pub fn run_with_exporters(
        &self,
        exporters: Vec<Box<dyn NoteExporter>>,
    ) -> Result<(Vec<Note>, InvertedIndex, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Exporting notes from {} source(s)", exporters.len());
        let mut sourced = Vec::new();
        for exporter in &exporters {
            let source = exporter.source();
            let raw_notes = exporter.export()?;
            tracing::info!("Source '{}' exported {} notes", source, raw_notes.len());
            sourced.extend(raw_notes.into_iter().map(|raw| SourcedNote { source, raw }));
        }
        let notes_exported = sourced.len();

        tracing::info!("Processing {} notes", notes_exported);
        let notes = self.process_notes(sourced);

        tracing::info!("Indexing {} notes", notes.len());
        let index = build_index(&notes);

        let stats = IndexStats {
            notes_exported,
            notes_indexed: notes.len(),
            unique_stems: index.unique_stems(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Indexing complete: {}/{} notes, {} unique stems in {}ms",
            stats.notes_indexed,
            stats.notes_exported,
            stats.unique_stems,
            stats.duration_ms
        );

        Ok((notes, index, stats))
    }

    /// Turn raw provider records into processed notes. Rows with
    /// unparseable timestamps are logged and skipped rather than
    /// aborting the run.
    fn process_notes(&self, sourced: Vec<SourcedNote>) -> Vec<Note> {
        let mut notes = Vec::with_capacity(sourced.len());

        for SourcedNote { source, raw } in sourced {
            let id = source.qualify_id(&raw.id);

            let (created, modified) = match (
                NaiveDateTime::parse_from_str(&raw.created, TIMESTAMP_FORMAT),
                NaiveDateTime::parse_from_str(&raw.modified, TIMESTAMP_FORMAT),
            ) {
                (Ok(c), Ok(m)) => (c.and_utc(), m.and_utc()),
                _ => {
                    tracing::warn!(
                        "Skipping note '{}': unparseable timestamps ({:?}, {:?})",
                        id,
                        raw.created,
                        raw.modified
                    );
                    continue;
                }
            };

            let text = format!("{} {}", raw.title, raw.body);
            let tokens = prepare_for_index(&text, &self.languages);
            tracing::debug!("Processed '{}' ({} tokens)", id, tokens.len());

            notes.push(Note {
                id,
                source,
                title: raw.title,
                body: raw.body,
                created,
                modified,
                tokens,
            });
        }

        notes
    }
}
