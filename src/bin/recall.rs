//! recall CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Set up a project indexing Apple Notes in English and Russian
//! recall init --source apple --language en --language ru
//!
//! # Search notes
//! recall search python asyncio --snippet
//!
//! # Open the second result in its note app
//! recall open 2
//!
//! # Re-export and re-index everything
//! recall rebuild
//! ```

use clap::Parser;
use recall::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RECALL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
