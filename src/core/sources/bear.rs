//! Bear provider.
//!
//! Export reads Bear's SQLite database directly (read-only);
//! opening a note goes through Bear's x-callback-url scheme.
//! Bear stores timestamps as Core Data reference dates: seconds
//! since 2001-01-01 00:00:00 UTC.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

use crate::core::error::{RecallError, Result};
use crate::core::sources::{NoteExporter, RawNote, Source};
use crate::core::types::Note;

const BEAR_DB_RELATIVE: &str =
    "Library/Group Containers/9K33E3U3T4.net.shinyfrog.bear/Application Data/database.sqlite";

const EXPORT_QUERY: &str = "\
    SELECT ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, ZCREATIONDATE, ZMODIFICATIONDATE \
    FROM ZSFNOTE \
    WHERE ZTRASHED = 0 \
    ORDER BY ZMODIFICATIONDATE DESC";

/// Convert a Core Data reference date to UTC
fn core_data_to_utc(seconds: f64) -> DateTime<Utc> {
    let epoch = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
    epoch + Duration::seconds(seconds as i64)
}

/// Bear exporter
#[derive(Debug)]
pub struct BearNotes {
    db_path: PathBuf,
}

impl BearNotes {
    pub fn new() -> Self {
        let db_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(BEAR_DB_RELATIVE);
        Self { db_path }
    }

    /// Exporter reading from an explicit database path
    pub fn with_db_path(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl Default for BearNotes {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteExporter for BearNotes {
    fn source(&self) -> Source {
        Source::Bear
    }

    fn export(&self) -> Result<Vec<RawNote>> {
        if !self.db_path.exists() {
            tracing::warn!("Bear database not found at {:?}, skipping", self.db_path);
            return Ok(Vec::new());
        }

        tracing::info!("Exporting Bear notes from {:?}", self.db_path);

        let conn = Connection::open_with_flags(&self.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let mut stmt = conn.prepare(EXPORT_QUERY)?;

        let rows = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            let title: Option<String> = row.get(1)?;
            let body: Option<String> = row.get(2)?;
            let created: f64 = row.get(3)?;
            let modified: f64 = row.get(4)?;
            Ok(RawNote {
                id,
                title: title.unwrap_or_default(),
                body: body.unwrap_or_default(),
                created: core_data_to_utc(created)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                modified: core_data_to_utc(modified)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            })
        })?;

        let mut notes = Vec::new();
        for row in rows {
            match row {
                Ok(note) => notes.push(note),
                Err(e) => tracing::warn!("Skipping malformed Bear row: {}", e),
            }
        }

        tracing::info!("Exported {} Bear notes", notes.len());
        Ok(notes)
    }

    fn open(&self, note: &Note) -> Result<()> {
        let url = format!(
            "bear://x-callback-url/open-note?id={}",
            note.provider_id()
        );
        open::that(&url)
            .map_err(|e| RecallError::ExportFailed(format!("failed to open {url}: {e}")))?;
        Ok(())
    }
}
