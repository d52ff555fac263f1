//! Open command - open a note from the last search

use clap::Args;
use serde::Serialize;

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::project::Project;
use crate::core::sources::open_note;

/// Arguments for the open command
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// 1-based rank of the note in the last search results
    pub rank: usize,
}

/// Open response
#[derive(Debug, Serialize)]
pub struct OpenResponse {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub source: String,
}

/// Execute the open command
pub fn execute(
    args: OpenArgs,
    project: &Project,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let results = project.load_last_search().map_err(|e| {
        if e.needs_rebuild() {
            "no cached search results. Run `recall search <query>` first.".to_string()
        } else {
            e.to_string()
        }
    })?;

    if args.rank < 1 || args.rank > results.len() {
        return Err(format!(
            "invalid rank {} (last search returned {} results)",
            args.rank,
            results.len()
        )
        .into());
    }

    let hit = &results[args.rank - 1];
    open_note(&hit.note)?;

    match format {
        OutputFormat::Human => {
            println!(
                "Opening {} ({} note)",
                colors::title(&hit.note.title),
                colors::source_tag(hit.note.source)
            );
        }
        OutputFormat::Json => {
            let response = OpenResponse {
                rank: args.rank,
                id: hit.note.id.clone(),
                title: hit.note.title.clone(),
                source: hit.note.source.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
