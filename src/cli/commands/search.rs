//! Search command - search notes by query

use clap::Args;
use serde::Serialize;

use crate::cli::output::{colors, make_snippet};
use crate::cli::OutputFormat;
use crate::core::project::Project;
use crate::core::search::search;
use crate::core::types::Score;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum number of search results to show
    #[arg(long, short = 'l', default_value = "5")]
    pub limit: usize,

    /// Hide relevance scores
    #[arg(long)]
    pub no_score: bool,

    /// Show a snippet with the search query in the note text
    #[arg(long)]
    pub snippet: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub source: String,
    pub score: Score,
    pub matched_tokens: Vec<String>,
    pub max_coverage: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub shown: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    project: &Project,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.join(" ");
    let limit = args.limit.max(1);

    let index = project.load_index()?;
    let notes = project.load_notes_map()?;

    let hits = search(&query, &index, &notes, &project.config.languages)?;

    // Cache the full ranked list for `recall open <rank>`
    project.save_last_search(&hits)?;

    let output = SearchResponseOutput {
        query: query.clone(),
        total_results: hits.len(),
        shown: hits.len().min(limit),
        results: hits
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, hit)| SearchResultItem {
                rank: i + 1,
                id: hit.note.id.clone(),
                title: hit.note.title.clone(),
                source: hit.note.source.to_string(),
                score: hit.score,
                matched_tokens: hit.matched_tokens.clone(),
                max_coverage: hit.max_coverage,
                snippet: if args.snippet {
                    make_snippet(&hit.note.body, &query)
                } else {
                    None
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No notes found for '{}'", colors::label(&query));
            } else {
                println!(
                    "Found {} notes (showing top {})",
                    colors::number(&output.total_results.to_string()),
                    colors::number(&output.shown.to_string())
                );

                for result in &output.results {
                    if args.no_score {
                        println!(
                            "{}. {}",
                            colors::rank(&result.rank.to_string()),
                            colors::title(&result.title)
                        );
                    } else {
                        println!(
                            "{}. {} | score: {}",
                            colors::rank(&result.rank.to_string()),
                            colors::title(&result.title),
                            colors::score(&result.score.to_string())
                        );
                    }

                    let hit = &hits[result.rank - 1];
                    println!(
                        "   {} {}",
                        colors::source_tag(hit.note.source),
                        colors::dim(&format!("note -> recall open {}", result.rank))
                    );

                    if let Some(snippet) = &result.snippet {
                        println!("    {snippet}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
