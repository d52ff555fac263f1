//! Snapshot persistence and project-root discovery.
//!
//! Snapshots are opaque binary blobs: a bincode payload followed
//! by a 4-byte magic and a big-endian CRC32 of the payload. Writes
//! go to a temp file and rename into place, so a crash mid-write
//! leaves the previous snapshot intact (last write wins). Loads
//! verify the footer and refuse corrupted files; the engine never
//! repairs a snapshot, callers prompt the user to rebuild.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{RecallError, Result};

/// Directory marking a recall project root
pub const PROJECT_DIR_NAME: &str = ".recall";

/// Magic bytes preceding the CRC32 footer
const SNAPSHOT_MAGIC: &[u8; 4] = b"RCL1";

/// Walk up from `start` until a directory containing `.recall` is
/// found.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_DIR_NAME).is_dir() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(RecallError::NotInitialized);
        }
    }
}

/// Well-known paths inside a project
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recall_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR_NAME)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.recall_dir().join("data")
    }

    pub fn config_file(&self) -> PathBuf {
        self.recall_dir().join("config.toml")
    }

    pub fn notes_snapshot(&self) -> PathBuf {
        self.data_dir().join("notes.bin")
    }

    pub fn index_snapshot(&self) -> PathBuf {
        self.data_dir().join("index.bin")
    }

    pub fn last_search_cache(&self) -> PathBuf {
        self.data_dir().join("last_search.bin")
    }

    /// Create the project directory tree if missing
    pub fn ensure_dirs_exist(&self) -> Result<()> {
        fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}

/// Serialize a value into a checksummed snapshot file.
///
/// Layout: `[bincode payload][magic "RCL1"][CRC32 BE]`. The write
/// is atomic: temp file in the same directory, then rename.
pub fn save_snapshot<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let payload = bincode::serialize(value)?;
    let crc = crc32fast::hash(&payload);

    let mut bytes = Vec::with_capacity(payload.len() + 8);
    bytes.extend_from_slice(&payload);
    bytes.extend_from_slice(SNAPSHOT_MAGIC);
    bytes.extend_from_slice(&crc.to_be_bytes());

    let tmp_path = path.with_extension("bin.tmp");
    fs::write(&tmp_path, &bytes)?;
    fs::rename(&tmp_path, path)?;

    tracing::debug!(
        "Saved snapshot {:?} ({} bytes, CRC32={:#010x})",
        path,
        payload.len(),
        crc
    );
    Ok(())
}

/// Load and verify a checksummed snapshot file.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(RecallError::SnapshotMissing(path.to_path_buf()));
    }

    let raw = fs::read(path)?;
    if raw.len() < 8 || &raw[raw.len() - 8..raw.len() - 4] != SNAPSHOT_MAGIC {
        return Err(RecallError::SnapshotCorrupt(format!(
            "{}: missing integrity footer",
            path.display()
        )));
    }

    let payload = &raw[..raw.len() - 8];
    let stored_crc = u32::from_be_bytes([
        raw[raw.len() - 4],
        raw[raw.len() - 3],
        raw[raw.len() - 2],
        raw[raw.len() - 1],
    ]);
    let computed_crc = crc32fast::hash(payload);
    if computed_crc != stored_crc {
        return Err(RecallError::SnapshotCorrupt(format!(
            "{}: CRC32 mismatch (stored {stored_crc:#010x}, computed {computed_crc:#010x})",
            path.display()
        )));
    }

    bincode::deserialize(payload).map_err(|e| {
        RecallError::SnapshotCorrupt(format!("{}: decode failed: {e}", path.display()))
    })
}
