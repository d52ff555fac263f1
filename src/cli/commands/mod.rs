//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for
//! a specific CLI command.

pub mod completions;
pub mod init;
pub mod list;
pub mod open;
pub mod rebuild;
pub mod search;
pub mod stats;

// Re-export argument types for use in mod.rs
pub use self::completions::CompletionsArgs;
pub use self::init::InitArgs;
pub use self::list::ListArgs;
pub use self::open::OpenArgs;
pub use self::rebuild::RebuildArgs;
pub use self::search::SearchArgs;
pub use self::stats::StatsArgs;
