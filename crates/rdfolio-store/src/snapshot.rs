//! Save/resume snapshots of a mapping graph
//!
//! The snapshot is the internal save format (a JSON document holding the
//! prefix registry and the triple list); Turtle export is the interchange
//! format and lives in [`crate::turtle`].

use crate::store::GraphStore;
use rdfolio_core::model::Triple;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store-level error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("unsupported snapshot version: {0}")]
    SnapshotVersion(u32),

    #[error("workspace folder does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("no write permission for workspace folder: {0}")]
    ReadOnlyDirectory(PathBuf),
}

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    prefixes: BTreeMap<String, String>,
    triples: Vec<Triple>,
}

/// Write the whole store to a snapshot file.
pub fn save_snapshot(store: &GraphStore, path: &Path) -> Result<(), StoreError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        prefixes: store
            .namespaces()
            .map(|(p, n)| (p.to_string(), n.to_string()))
            .collect(),
        triples: store.iter().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), triples = snapshot.triples.len(), "saved snapshot");
    Ok(())
}

/// Rebuild a store from a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<GraphStore, StoreError> {
    let json = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(StoreError::SnapshotVersion(snapshot.version));
    }

    let mut store = GraphStore::new();
    for (prefix, namespace) in &snapshot.prefixes {
        store.bind(prefix, namespace);
    }
    for triple in snapshot.triples {
        store.insert(triple);
    }
    debug!(path = %path.display(), triples = store.len(), "loaded snapshot");
    Ok(store)
}

/// Locations for saved and exported mappings. Both folders must exist and be
/// writable before a session starts.
#[derive(Debug, Clone)]
pub struct WorkspaceDirs {
    pub save_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl WorkspaceDirs {
    pub const SAVE_DIR: &'static str = "saved_mappings";
    pub const EXPORT_DIR: &'static str = "exported_mappings";

    /// Check the workspace folders under `root`.
    pub fn check(root: &Path) -> Result<Self, StoreError> {
        let save_dir = root.join(Self::SAVE_DIR);
        let export_dir = root.join(Self::EXPORT_DIR);
        for dir in [&save_dir, &export_dir] {
            if !dir.is_dir() {
                return Err(StoreError::MissingDirectory(dir.clone()));
            }
            if fs::metadata(dir)?.permissions().readonly() {
                return Err(StoreError::ReadOnlyDirectory(dir.clone()));
            }
        }
        Ok(Self {
            save_dir,
            export_dir,
        })
    }
}
