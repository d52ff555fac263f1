//! Stats command - print notes index statistics

use clap::Args;

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::project::Project;

/// Arguments for the stats command
#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

/// Execute the stats command
pub fn execute(
    _args: StatsArgs,
    project: &Project,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = project.stats()?;

    match format {
        OutputFormat::Human => {
            output::print_project_stats(&stats);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
