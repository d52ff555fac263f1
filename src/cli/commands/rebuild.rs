//! Rebuild command - rebuild the search index with stored configuration

use clap::Args;
use serde::Serialize;

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::pipeline::IndexingPipeline;
use crate::core::project::Project;
use crate::core::types::IndexStats;

/// Arguments for the rebuild command
#[derive(Args, Debug, Default)]
pub struct RebuildArgs {}

/// Rebuild result response
#[derive(Debug, Serialize)]
pub struct RebuildResponse {
    pub notes_exported: usize,
    pub notes_indexed: usize,
    pub unique_stems: usize,
    pub duration_ms: u64,
}

/// Run the full pipeline for a project and persist the artifacts.
///
/// Shared between `init` and `rebuild`. Snapshots are only written
/// after the whole pipeline succeeded, so a provider failure
/// leaves the previous index untouched.
pub(crate) fn rebuild_project(project: &mut Project) -> crate::core::error::Result<IndexStats> {
    let pipeline = IndexingPipeline::new(&project.config);
    let (notes, index, stats) = pipeline.run()?;

    project.save_artifacts(&notes, &index)?;
    project.config.touch_indexed();
    project.save_config()?;

    Ok(stats)
}

/// Execute the rebuild command
pub fn execute(
    _args: RebuildArgs,
    mut project: Project,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = rebuild_project(&mut project)?;

    match format {
        OutputFormat::Human => {
            output::print_success("Search index successfully rebuilt");
            println!(
                "{} notes indexed ({} unique stems)",
                colors::number(&stats.notes_indexed.to_string()),
                colors::number(&stats.unique_stems.to_string())
            );
            println!();
            output::print_project_stats(&project.stats()?);
        }
        OutputFormat::Json => {
            let response = RebuildResponse {
                notes_exported: stats.notes_exported,
                notes_indexed: stats.notes_indexed,
                unique_stems: stats.unique_stems,
                duration_ms: stats.duration_ms,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
