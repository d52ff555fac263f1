//! Init command - set up a recall project in the current directory

use clap::Args;
use std::env;

use crate::cli::commands::rebuild::rebuild_project;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::ProjectConfig;
use crate::core::project::Project;
use crate::core::sources::Source;
use crate::core::storage::ProjectPaths;
use crate::core::text::Language;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Note sources to index (can be specified multiple times)
    #[arg(long = "source", short = 's', value_enum)]
    pub sources: Vec<Source>,

    /// Note languages (can be specified multiple times)
    #[arg(long = "language", short = 'l', value_enum)]
    pub languages: Vec<Language>,

    /// Rebuild the index of an existing project, keeping its configuration
    #[arg(long, conflicts_with = "force")]
    pub rebuild: bool,

    /// Overwrite the configuration of an existing project
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let root = env::current_dir()?;
    let paths = ProjectPaths::new(&root);
    let already_initialized = paths.recall_dir().is_dir();

    if already_initialized && args.rebuild {
        // Keep the stored configuration, just rebuild the index
        let mut project = Project::discover_from(&root)?;
        let _stats = rebuild_project(&mut project)?;
        finish(&project, format)?;
        return Ok(());
    }

    if already_initialized && !args.force {
        return Err(format!(
            "recall project already initialized at {}. \
             Use --rebuild to rebuild the index, or --force to overwrite the configuration.",
            root.display()
        )
        .into());
    }

    let sources = if args.sources.is_empty() {
        vec![Source::Apple]
    } else {
        args.sources
    };
    let languages = if args.languages.is_empty() {
        vec![Language::En]
    } else {
        args.languages
    };

    let mut config = ProjectConfig::new(sources, languages);

    // Re-init keeps the original creation timestamp when the old
    // config is still readable
    if already_initialized {
        if let Ok(previous) = ProjectConfig::from_file(paths.config_file()) {
            config.created_at = previous.created_at;
        }
    }

    let mut project = Project::init(&root, config)?;
    let _stats = rebuild_project(&mut project)?;
    finish(&project, format)?;

    Ok(())
}

fn finish(project: &Project, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stats = project.stats()?;
    match format {
        OutputFormat::Human => {
            output::print_success("recall index successfully built");
            println!();
            output::print_project_stats(&stats);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
