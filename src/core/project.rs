//! Project container.
//!
//! A [`Project`] bundles the discovered root directory with the
//! loaded configuration and exposes typed snapshot accessors.
//! Every CLI command receives one of these; nothing reads
//! configuration or snapshots ambiently.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::core::config::ProjectConfig;
use crate::core::error::Result;
use crate::core::index::InvertedIndex;
use crate::core::storage::{self, ProjectPaths};
use crate::core::types::{Note, ProjectStats, SearchHit};

/// An initialized recall project
#[derive(Debug, Clone)]
pub struct Project {
    paths: ProjectPaths,
    pub config: ProjectConfig,
}

impl Project {
    /// Discover the project containing the current directory
    pub fn discover() -> Result<Self> {
        Self::discover_from(&env::current_dir()?)
    }

    /// Discover the project containing `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let root = storage::find_project_root(start)?;
        let paths = ProjectPaths::new(root);
        let config = ProjectConfig::from_file(paths.config_file())?;
        Ok(Self { paths, config })
    }

    /// Initialize a project at `root`: create the directory tree
    /// and persist the configuration.
    pub fn init(root: &Path, config: ProjectConfig) -> Result<Self> {
        config.validate()?;

        let paths = ProjectPaths::new(root);
        paths.ensure_dirs_exist()?;
        config.save_to(paths.config_file())?;

        tracing::info!("Initialized recall project at {:?}", root);
        Ok(Self { paths, config })
    }

    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Persist the current configuration
    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(self.paths.config_file())
    }

    /// Persist both pipeline artifacts, notes first. Each write is
    /// atomic; a rebuild always rewrites the pair together.
    pub fn save_artifacts(&self, notes: &[Note], index: &InvertedIndex) -> Result<()> {
        save_notes(&self.paths, notes)?;
        save_index(&self.paths, index)?;
        Ok(())
    }

    /// Load the processed note collection
    pub fn load_notes(&self) -> Result<Vec<Note>> {
        storage::load_snapshot(&self.paths.notes_snapshot())
    }

    /// Load the note collection keyed by id
    pub fn load_notes_map(&self) -> Result<HashMap<String, Note>> {
        let notes = self.load_notes()?;
        Ok(notes.into_iter().map(|n| (n.id.clone(), n)).collect())
    }

    /// Load the inverted index
    pub fn load_index(&self) -> Result<InvertedIndex> {
        storage::load_snapshot(&self.paths.index_snapshot())
    }

    /// Cache the full ranked result list of the latest search
    pub fn save_last_search(&self, hits: &[SearchHit]) -> Result<()> {
        storage::save_snapshot(&hits, &self.paths.last_search_cache())
    }

    /// Load the cached result list of the latest search
    pub fn load_last_search(&self) -> Result<Vec<SearchHit>> {
        storage::load_snapshot(&self.paths.last_search_cache())
    }

    /// Compute display statistics from the persisted artifacts
    pub fn stats(&self) -> Result<ProjectStats> {
        let notes = self.load_notes()?;
        let index = self.load_index()?;

        Ok(ProjectStats {
            notes_count: notes.len(),
            sources: self.config.sources.clone(),
            languages: self.config.languages.clone(),
            unique_stems: index.unique_stems(),
            last_indexed_at: self.config.last_indexed_at,
            project_root: self.paths.root().to_path_buf(),
        })
    }
}

fn save_notes(paths: &ProjectPaths, notes: &[Note]) -> Result<()> {
    storage::save_snapshot(&notes, &paths.notes_snapshot())
}

fn save_index(paths: &ProjectPaths, index: &InvertedIndex) -> Result<()> {
    storage::save_snapshot(index, &paths.index_snapshot())
}
