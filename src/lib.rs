//! recall - personal notes search engine
//!
//! Indexes a personal collection of notes pulled from external
//! note applications and answers free-text queries with a ranked
//! result list.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (presentation-agnostic)
//!   - text (normalization, tokenization, stemming)
//!   - index (inverted index construction)
//!   - search (candidate scoring and ranking)
//!   - sources (note providers), pipeline, storage, config
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Multilingual indexing (every note runs through each active
//!   language profile: stopword filter + Snowball stemming)
//! - Positional inverted index with phrase-adjacency scoring
//! - Three-factor ranking: coverage, frequency, phrase bonus
//! - Checksummed binary snapshots with atomic replacement

// Core domain logic (presentation-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::ProjectConfig;
pub use crate::core::error::{RecallError, Result};
pub use crate::core::project::Project;
pub use crate::core::types::*;
