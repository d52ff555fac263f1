//! Apple Notes provider.
//!
//! Export runs an embedded AppleScript through `osascript`; the
//! script prints a JSON array of raw notes on stdout. Opening a
//! note tells the Notes app to show it by id.

use std::process::Command;

use crate::core::error::{RecallError, Result};
use crate::core::sources::{NoteExporter, RawNote, Source};
use crate::core::types::Note;

/// AppleScript that dumps every note as a JSON array. Dates are
/// rendered as `YYYY-MM-DD HH:MM:SS` to match the provider
/// timestamp contract.
const EXPORT_SCRIPT: &str = r#"
on jsonEscape(t)
    set t to my replaceAll(t, "\\", "\\\\")
    set t to my replaceAll(t, "\"", "\\\"")
    set t to my replaceAll(t, return, "\\n")
    set t to my replaceAll(t, linefeed, "\\n")
    set t to my replaceAll(t, tab, "\\t")
    return t
end jsonEscape

on replaceAll(t, oldText, newText)
    set AppleScript's text item delimiters to oldText
    set parts to text items of t
    set AppleScript's text item delimiters to newText
    set t to parts as text
    set AppleScript's text item delimiters to ""
    return t
end replaceAll

on pad(n)
    if n < 10 then return "0" & n
    return n as text
end pad

on formatDate(d)
    return (year of d as text) & "-" & my pad(month of d as integer) & "-" & my pad(day of d) & " " & my pad(hours of d) & ":" & my pad(minutes of d) & ":" & my pad(seconds of d)
end formatDate

tell application "Notes"
    set out to "["
    set first_note to true
    repeat with n in notes
        if not first_note then set out to out & ","
        set first_note to false
        set out to out & "{\"id\":\"" & my jsonEscape(id of n as text) & "\""
        set out to out & ",\"title\":\"" & my jsonEscape(name of n as text) & "\""
        set out to out & ",\"body\":\"" & my jsonEscape(plaintext of n) & "\""
        set out to out & ",\"created\":\"" & my formatDate(creation date of n) & "\""
        set out to out & ",\"modified\":\"" & my formatDate(modification date of n) & "\"}"
    end repeat
    return out & "]"
end tell
"#;

/// Apple Notes exporter
#[derive(Debug, Default)]
pub struct AppleNotes;

impl AppleNotes {
    pub fn new() -> Self {
        Self
    }
}

impl NoteExporter for AppleNotes {
    fn source(&self) -> Source {
        Source::Apple
    }

    fn export(&self) -> Result<Vec<RawNote>> {
        tracing::info!("Exporting Apple Notes via osascript");

        let output = Command::new("osascript")
            .arg("-e")
            .arg(EXPORT_SCRIPT)
            .output()
            .map_err(|e| RecallError::ExportFailed(format!("failed to run osascript: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecallError::ExportFailed(format!(
                "osascript exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let notes: Vec<RawNote> = serde_json::from_slice(&output.stdout)?;
        tracing::info!("Exported {} Apple notes", notes.len());

        Ok(notes)
    }

    fn open(&self, note: &Note) -> Result<()> {
        let script = format!(
            r#"tell application "Notes"
    activate
    show note id "{}"
end tell"#,
            note.provider_id()
        );

        let status = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .status()
            .map_err(|e| RecallError::ExportFailed(format!("failed to run osascript: {e}")))?;

        if !status.success() {
            return Err(RecallError::ExportFailed(format!(
                "osascript exited with {status} while opening note"
            )));
        }

        Ok(())
    }
}
