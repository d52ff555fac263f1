//! List command - print all indexed note titles

use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::project::Project;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {}

/// List response item
#[derive(Debug, Serialize)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub source: String,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub notes: Vec<ListItem>,
}

/// Execute the list command
pub fn execute(
    _args: ListArgs,
    project: &Project,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let notes = project.load_notes()?;

    match format {
        OutputFormat::Human => {
            for note in &notes {
                println!("{}", note.title);
            }
        }
        OutputFormat::Json => {
            let response = ListResponse {
                count: notes.len(),
                notes: notes
                    .iter()
                    .map(|n| ListItem {
                        id: n.id.clone(),
                        title: n.title.clone(),
                        source: n.source.to_string(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
