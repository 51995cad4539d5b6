//! Shared fixtures: a store on a fresh temporary data file.

use std::path::PathBuf;

use semnet::GraphStore;
use tempfile::TempDir;

/// Store plus the temp dir that owns its data file; the dir is removed on drop.
pub struct Fixture {
    pub store: GraphStore,
    pub path: PathBuf,
    _dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("semantic_network.json");
        let store = GraphStore::open(&path).expect("open empty store");
        Self {
            store,
            path,
            _dir: dir,
        }
    }

    /// Opens a second, independent store on the same data file.
    pub fn reopen(&self) -> GraphStore {
        GraphStore::open(&self.path).expect("reopen store")
    }
}

pub fn path(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}
