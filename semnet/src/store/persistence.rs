//! Reading and writing the graph data file.
//!
//! Loads tolerate a missing file (empty graph) and unparseable content (empty graph plus a
//! [`LoadWarning`]). Saves go through a temporary file in the target directory that is
//! renamed over the data file, so an interrupted write never truncates it.

use std::fmt;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{GraphError, Result};
use crate::graph::{logging, SemanticGraph};
use crate::store::serializer::GraphSerializer;

/// The data file existed but could not be parsed; an empty graph was used instead.
///
/// Recoverable: the store stays usable and the next save overwrites the bad file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid graph data in {} ({}); starting with an empty graph",
            self.path.display(),
            self.reason
        )
    }
}

/// Graph read from disk plus an optional warning.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub graph: SemanticGraph,
    pub warning: Option<LoadWarning>,
}

/// Reads `path`. Only I/O failures other than "not found" are errors.
pub fn load(path: &Path, serializer: &dyn GraphSerializer) -> Result<Loaded> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(Loaded {
                graph: SemanticGraph::new(),
                warning: None,
            })
        }
        Err(e) => {
            return Err(GraphError::Persistence(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    match serializer.deserialize(&bytes) {
        Ok(graph) => {
            logging::log_loaded(path, graph.node_count(), graph.edge_count());
            Ok(Loaded {
                graph,
                warning: None,
            })
        }
        Err(e) => {
            let reason = match e {
                GraphError::Persistence(reason) => reason,
                other => other.to_string(),
            };
            logging::log_load_warning(path, &reason);
            Ok(Loaded {
                graph: SemanticGraph::new(),
                warning: Some(LoadWarning {
                    path: path.to_path_buf(),
                    reason,
                }),
            })
        }
    }
}

/// Writes the whole graph to `path` atomically, creating parent directories.
pub fn save(path: &Path, graph: &SemanticGraph, serializer: &dyn GraphSerializer) -> Result<()> {
    let result = write_atomically(path, &serializer.serialize(graph)?);
    match &result {
        Ok(()) => logging::log_saved(path, graph.node_count(), graph.edge_count()),
        Err(e) => logging::log_save_error(path, e),
    }
    result
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |e: std::io::Error| {
        GraphError::Persistence(format!("cannot write {}: {}", path.display(), e))
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
