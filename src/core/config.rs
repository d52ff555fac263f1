//! Project configuration management.
//!
//! The configuration lives in `.recall/config.toml` inside the
//! project root. It is the single owner of the active provider and
//! language-profile sets: both are threaded explicitly into the
//! text pipeline and query engine, never read as ambient state.
//! The profile set must be persisted alongside the snapshots; an
//! index searched with a different profile set is silently wrong.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{RecallError, Result};
use crate::core::sources::Source;
use crate::core::text::Language;

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Providers to export notes from
    pub sources: Vec<Source>,

    /// Active language profiles, in pipeline iteration order
    pub languages: Vec<Language>,

    /// When the project was first initialized; survives re-init
    pub created_at: DateTime<Utc>,

    /// When the index was last rebuilt
    pub last_indexed_at: DateTime<Utc>,
}

impl ProjectConfig {
    /// Create a fresh configuration with current timestamps.
    ///
    /// Duplicate entries are removed while preserving first-seen
    /// order, so the pipeline's per-profile iteration stays
    /// deterministic.
    pub fn new(sources: Vec<Source>, languages: Vec<Language>) -> Self {
        let now = Utc::now();
        Self {
            sources: dedup_preserving_order(sources),
            languages: dedup_preserving_order(languages),
            created_at: now,
            last_indexed_at: now,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            RecallError::ConfigError(format!(
                "failed to read config {}: {e}",
                path.as_ref().display()
            ))
        })?;

        let config: ProjectConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a TOML file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(RecallError::ConfigError(
                "at least one note source must be selected".to_string(),
            ));
        }
        if self.languages.is_empty() {
            return Err(RecallError::ConfigError(
                "at least one note language must be selected".to_string(),
            ));
        }
        Ok(())
    }

    /// Mark the index as freshly rebuilt
    pub fn touch_indexed(&mut self) {
        self.last_indexed_at = Utc::now();
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Sources: {:?}", self.sources);
        tracing::info!("  Languages: {:?}", self.languages);
        tracing::info!("  Created: {}", self.created_at.to_rfc3339());
        tracing::info!("  Last indexed: {}", self.last_indexed_at.to_rfc3339());
    }
}

fn dedup_preserving_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
