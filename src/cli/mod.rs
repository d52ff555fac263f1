//! CLI adapter for recall
//!
//! Provides the command-line interface over the core engine. The
//! adapter owns argument parsing and presentation; all engine
//! logic lives in `core/`.
//!
//! # Architecture
//!
//! ```text
//!       +------------------+
//!       |     core/        |
//!       |  (engine logic)  |
//!       +--------+---------+
//!                |
//!                v
//!       +------------------+
//!       |      cli/        |
//!       |  (clap adapter)  |
//!       +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::project::Project;

/// recall - personal notes search engine
///
/// Index notes from Apple Notes and Bear, then search them with
/// multilingual stemmed matching and phrase-aware ranking.
#[derive(Parser, Debug)]
#[command(name = "recall")]
#[command(version)]
#[command(about = "Personal notes search engine", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a recall project in the current directory
    Init(commands::InitArgs),

    /// Rebuild the search index with the stored configuration
    Rebuild(commands::RebuildArgs),

    /// Search notes by query
    Search(commands::SearchArgs),

    /// Open a note from the last search by its rank
    Open(commands::OpenArgs),

    /// Print all indexed note titles
    List(commands::ListArgs),

    /// Print notes index statistics
    Stats(commands::StatsArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  recall completions bash > ~/.local/share/bash-completion/completions/recall
    ///   zsh:   recall completions zsh > ~/.zfunc/_recall
    ///   fish:  recall completions fish > ~/.config/fish/completions/recall.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Commands that work without a discovered project
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::Init(args) => return commands::init::execute(args, cli.format),
        _ => {}
    }

    // Everything else needs an initialized project
    let project = Project::discover()?;

    let result = match cli.command {
        Commands::Rebuild(args) => commands::rebuild::execute(args, project, cli.format),
        Commands::Search(args) => commands::search::execute(args, &project, cli.format),
        Commands::Open(args) => commands::open::execute(args, &project, cli.format),
        Commands::List(args) => commands::list::execute(args, &project, cli.format),
        Commands::Stats(args) => commands::stats::execute(args, &project, cli.format),
        Commands::Init(_) | Commands::Completions(_) => unreachable!(), // Handled above
    };

    // Missing or corrupt snapshots are fixed by `recall rebuild`
    result.map_err(|e| {
        match e.downcast_ref::<crate::core::error::RecallError>() {
            Some(re) if re.needs_rebuild() => {
                format!("{e}. Run `recall rebuild` to rebuild the index.").into()
            }
            _ => e,
        }
    })
}
