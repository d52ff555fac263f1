//! Note providers.
//!
//! Each provider is a closed enum variant paired with a
//! [`NoteExporter`] capability: export the full note list, and
//! open a single note in the owning application. The engine never
//! branches on the source tag itself; it only consumes the flat
//! [`RawNote`] records the exporters yield.

mod apple;
mod bear;

pub use apple::AppleNotes;
pub use bear::BearNotes;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{RecallError, Result};
use crate::core::types::Note;

/// Origin provider of a note
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Apple Notes (AppleScript export)
    Apple,
    /// Bear (SQLite export)
    Bear,
}

impl Source {
    /// All supported providers, in canonical order
    pub fn all() -> &'static [Source] {
        &[Source::Apple, Source::Bear]
    }

    /// Canonical tag used for id qualification and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Apple => "apple",
            Source::Bear => "bear",
        }
    }

    /// Qualify a provider-native id so notes from different
    /// providers can never collide.
    pub fn qualify_id(&self, provider_id: &str) -> String {
        format!("{}_{provider_id}", self.as_str())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "apple" => Ok(Source::Apple),
            "bear" => Ok(Source::Bear),
            other => Err(RecallError::UnsupportedSource(other.to_string())),
        }
    }
}

/// A note exactly as a provider hands it over.
///
/// Timestamps are `%Y-%m-%d %H:%M:%S` strings; the processing
/// layer parses them into UTC datetimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNote {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created: String,
    pub modified: String,
}

/// Capability interface implemented per provider
pub trait NoteExporter {
    /// The provider this exporter serves
    fn source(&self) -> Source;

    /// Export every note the provider holds
    fn export(&self) -> Result<Vec<RawNote>>;

    /// Open one note in the owning application
    fn open(&self, note: &Note) -> Result<()>;
}

/// Build the exporter for a provider tag
pub fn exporter_for(source: Source) -> Box<dyn NoteExporter> {
    match source {
        Source::Apple => Box::new(AppleNotes::new()),
        Source::Bear => Box::new(BearNotes::new()),
    }
}

/// Open a note in the application it came from
pub fn open_note(note: &Note) -> Result<()> {
    exporter_for(note.source).open(note)
}
