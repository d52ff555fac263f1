//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::ProjectStats;

/// Color scheme for CLI output
pub mod colors {
    use crate::core::sources::Source;
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for note titles
    pub fn title(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for a source tag (one fixed color per provider)
    pub fn source_tag(source: Source) -> ColoredString {
        match source {
            Source::Apple => source.as_str().yellow(),
            Source::Bear => source.as_str().red(),
        }
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for search scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Style for highlighted query matches inside snippets
    pub fn highlight(s: &str) -> ColoredString {
        s.yellow().bold()
    }
}

/// Number of context characters kept on each side of a snippet hit
const SNIPPET_WINDOW: usize = 40;

static CLEANUP_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Build a highlighted snippet around the first occurrence of
/// `query` in `text` (case-insensitive). Returns `None` when the
/// raw query does not occur verbatim.
pub fn make_snippet(text: &str, query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }

    let pattern = Regex::new(&format!("(?i){}", regex::escape(query))).ok()?;
    let m = pattern.find(text)?;

    // Clamp the window to char boundaries
    let start = text[..m.start()]
        .char_indices()
        .rev()
        .nth(SNIPPET_WINDOW - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = text[m.end()..]
        .char_indices()
        .nth(SNIPPET_WINDOW)
        .map(|(i, _)| m.end() + i)
        .unwrap_or(text.len());

    let window = CLEANUP_WS.replace_all(&text[start..end], " ");
    let highlighted = pattern.replace_all(&window, |caps: &regex::Captures| {
        colors::highlight(&caps[0]).to_string()
    });

    Some(format!("...{highlighted}..."))
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    let secs = duration.num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }

    let mins = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Print project statistics in the human format
pub fn print_project_stats(stats: &ProjectStats) {
    println!("{}\n", colors::label("Project Stats"));
    println!("Indexed         {} notes", colors::number(&stats.notes_count.to_string()));
    println!(
        "Note sources    {}",
        stats
            .sources
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Note languages  {}",
        stats
            .languages
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Unique stems    {}",
        colors::number(&stats.unique_stems.to_string())
    );
    println!(
        "Last indexed    {}",
        colors::dim(&format_relative_time(&stats.last_indexed_at))
    );
    println!("Project path    {}", stats.project_root.display());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
