// Test fixtures for integration testing

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use recall::core::config::ProjectConfig;
use recall::core::error::Result;
use recall::core::index::build_index;
use recall::core::project::Project;
use recall::core::sources::{NoteExporter, RawNote, Source};
use recall::core::text::{prepare_for_index, Language};
use recall::core::types::Note;

/// Build a processed note with tokens produced by the real text
/// pipeline over the given languages.
#[allow(dead_code)] // Used per test harness
pub fn processed_note(id: &str, title: &str, body: &str, languages: &[Language]) -> Note {
    Note {
        id: id.to_string(),
        source: Source::Apple,
        title: title.to_string(),
        body: body.to_string(),
        created: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        modified: Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap(),
        tokens: prepare_for_index(&format!("{title} {body}"), languages),
    }
}

/// Raw provider note with valid timestamps
#[allow(dead_code)] // Used per test harness
pub fn raw_note(id: &str, title: &str, body: &str) -> RawNote {
    RawNote {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        created: "2025-01-01 12:00:00".to_string(),
        modified: "2025-01-02 12:00:00".to_string(),
    }
}

/// Canned in-memory note provider
#[allow(dead_code)] // Used per test harness
pub struct FakeExporter {
    pub source: Source,
    pub notes: Vec<RawNote>,
}

#[allow(dead_code)] // Used per test harness
impl FakeExporter {
    pub fn apple(notes: Vec<RawNote>) -> Box<dyn NoteExporter> {
        Box::new(Self { source: Source::Apple, notes })
    }

    pub fn bear(notes: Vec<RawNote>) -> Box<dyn NoteExporter> {
        Box::new(Self { source: Source::Bear, notes })
    }
}

impl NoteExporter for FakeExporter {
    fn source(&self) -> Source {
        self.source
    }

    fn export(&self) -> Result<Vec<RawNote>> {
        Ok(self.notes.clone())
    }

    fn open(&self, _note: &Note) -> Result<()> {
        Ok(())
    }
}

/// An initialized project in a temp directory, with the given
/// notes already processed, indexed and persisted.
#[allow(dead_code)] // Used across integration test harnesses
pub struct TestProject {
    pub dir: TempDir,
    pub project: Project,
}

impl TestProject {
    /// English-only project over (id, title, body) triples
    #[allow(dead_code)]
    pub fn english(notes: &[(&str, &str, &str)]) -> Self {
        Self::with_languages(notes, &[Language::En])
    }

    /// Project with explicit language profiles
    #[allow(dead_code)]
    pub fn with_languages(notes: &[(&str, &str, &str)], languages: &[Language]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = ProjectConfig::new(vec![Source::Apple], languages.to_vec());
        let project = Project::init(dir.path(), config).expect("Failed to init project");

        let processed: Vec<Note> = notes
            .iter()
            .map(|(id, title, body)| processed_note(id, title, body, languages))
            .collect();
        let index = build_index(&processed);
        project
            .save_artifacts(&processed, &index)
            .expect("Failed to persist artifacts");

        Self { dir, project }
    }
}
