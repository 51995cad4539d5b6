//! Graph store: a [`SemanticGraph`] bound to its data file with write-through saves.
//!
//! Each mutation runs on a working copy, the copy is saved, and only then does it replace
//! the live graph. A validation, lookup or save failure leaves the store exactly as it was.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::graph::{Connectivity, EdgeAttributes, SemanticGraph};
use crate::link_type::LinkType;
use crate::store::persistence::{self, LoadWarning};
use crate::store::serializer::JsonAdjacency;

/// Owned semantic network backed by a JSON data file.
///
/// Construct one per process with [`GraphStore::open`] and pass it by reference; tests
/// build independent instances on temporary paths.
#[derive(Debug)]
pub struct GraphStore {
    graph: SemanticGraph,
    path: PathBuf,
    serializer: JsonAdjacency,
    load_warning: Option<LoadWarning>,
}

impl GraphStore {
    /// Loads the graph at `path`.
    ///
    /// A missing file gives an empty graph. Unparseable content gives an empty graph and a
    /// warning available from [`load_warning`](Self::load_warning). Nothing is written until
    /// the first mutation or [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let serializer = JsonAdjacency;
        let loaded = persistence::load(&path, &serializer)?;
        Ok(Self {
            graph: loaded.graph,
            path,
            serializer,
            load_warning: loaded.warning,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the current graph.
    pub fn graph(&self) -> &SemanticGraph {
        &self.graph
    }

    /// Warning produced while opening, if the data file was corrupt.
    pub fn load_warning(&self) -> Option<&LoadWarning> {
        self.load_warning.as_ref()
    }

    /// Writes the current graph to the data file.
    pub fn save(&self) -> Result<()> {
        persistence::save(&self.path, &self.graph, &self.serializer)
    }

    /// See [`SemanticGraph::add_or_update_edge`]; missing endpoints are created.
    pub fn add_or_update_edge(
        &mut self,
        source: &str,
        target: &str,
        link_type: LinkType,
        description: &str,
    ) -> Result<()> {
        self.commit(|g| g.add_or_update_edge(source, target, link_type, description))
    }

    /// Adds an isolated node; `Ok(false)` if it already existed.
    pub fn create_node(&mut self, name: &str) -> Result<bool> {
        self.commit(|g| g.create_node(name))
    }

    /// See [`SemanticGraph::rename_node`] for the merge policy.
    pub fn rename_node(&mut self, old: &str, new: &str) -> Result<()> {
        self.commit(|g| g.rename_node(old, new))
    }

    pub fn delete_node(&mut self, name: &str) -> Result<()> {
        self.commit(|g| g.delete_node(name))
    }

    pub fn edit_edge(
        &mut self,
        source: &str,
        target: &str,
        link_type: LinkType,
        description: &str,
    ) -> Result<()> {
        self.commit(|g| g.edit_edge(source, target, link_type, description))
    }

    pub fn delete_edge(&mut self, source: &str, target: &str) -> Result<()> {
        self.commit(|g| g.delete_edge(source, target))
    }

    pub fn list_nodes(&self) -> Vec<String> {
        self.graph.list_nodes()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.graph.contains_node(name)
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&EdgeAttributes> {
        self.graph.edge(source, target)
    }

    pub fn find_paths(&self, source: &str, target: &str) -> Result<Connectivity> {
        self.graph.find_paths(source, target)
    }

    fn commit<T>(&mut self, mutate: impl FnOnce(&mut SemanticGraph) -> Result<T>) -> Result<T> {
        let mut working = self.graph.clone();
        let out = mutate(&mut working)?;
        persistence::save(&self.path, &working, &self.serializer)?;
        self.graph = working;
        Ok(out)
    }
}
