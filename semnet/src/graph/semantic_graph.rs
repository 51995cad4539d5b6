//! Semantic graph: labeled nodes plus typed, described directed edges.
//!
//! Nodes are identified by their label. Node order and each node's outgoing edge order
//! follow insertion, which keeps listings, saved files and path enumeration stable.
//! At most one edge exists per ordered `(source, target)` pair; self-loops and cycles
//! are allowed.

use crate::error::{GraphError, Result};
use crate::graph::logging;
use crate::graph::paths::{self, Connectivity};
use crate::link_type::LinkType;

use serde::{Deserialize, Serialize};

/// Attributes stored on a directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeAttributes {
    pub link_type: LinkType,
    /// Free text; may be empty.
    #[serde(default)]
    pub description: String,
}

impl EdgeAttributes {
    pub fn new(link_type: LinkType, description: impl Into<String>) -> Self {
        Self {
            link_type,
            description: description.into(),
        }
    }
}

/// Borrowed view of one edge, yielded by [`SemanticGraph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub attributes: &'a EdgeAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeEntry {
    label: String,
    /// Outgoing edges as (target label, attributes), in insertion order.
    outgoing: Vec<(String, EdgeAttributes)>,
}

impl NodeEntry {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            outgoing: Vec::new(),
        }
    }

    fn edge_to(&self, target: &str) -> Option<&EdgeAttributes> {
        self.outgoing
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, attrs)| attrs)
    }
}

/// In-memory semantic network.
///
/// Pure data model: no I/O. [`GraphStore`](crate::GraphStore) wraps it with write-through
/// persistence. Every mutation validates first and changes nothing on error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticGraph {
    nodes: Vec<NodeEntry>,
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GraphError::Validation { field });
    }
    Ok(value)
}

impl SemanticGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.outgoing.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.position(label.trim()).is_some()
    }

    /// Node labels in insertion order.
    pub fn list_nodes(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.label.clone()).collect()
    }

    /// Iterates node labels in insertion order without allocating.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// Outgoing edges of `label` as `(target, attributes)`, or `None` if the node is absent.
    pub fn outgoing(&self, label: &str) -> Option<impl Iterator<Item = (&str, &EdgeAttributes)> + '_> {
        let idx = self.position(label.trim())?;
        Some(
            self.nodes[idx]
                .outgoing
                .iter()
                .map(|(target, attrs)| (target.as_str(), attrs)),
        )
    }

    /// Attributes of the edge `source -> target`, if present.
    pub fn edge(&self, source: &str, target: &str) -> Option<&EdgeAttributes> {
        let idx = self.position(source.trim())?;
        self.nodes[idx].edge_to(target.trim())
    }

    /// All edges, grouped by source in node order, each group in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.nodes.iter().flat_map(|node| {
            node.outgoing.iter().map(move |(target, attributes)| EdgeRef {
                source: node.label.as_str(),
                target: target.as_str(),
                attributes,
            })
        })
    }

    /// Adds an isolated node. Returns `false` when the node already existed.
    pub fn create_node(&mut self, name: &str) -> Result<bool> {
        let name = required(name, "node")?;
        if self.position(name).is_some() {
            return Ok(false);
        }
        self.nodes.push(NodeEntry::new(name));
        logging::log_mutation("create_node", name);
        Ok(true)
    }

    /// Inserts the edge `source -> target` or overwrites its attributes.
    ///
    /// Labels and description are trimmed. Missing endpoints are created as part of the
    /// insert, source first, then target.
    pub fn add_or_update_edge(
        &mut self,
        source: &str,
        target: &str,
        link_type: LinkType,
        description: &str,
    ) -> Result<()> {
        let source = required(source, "source")?;
        let target = required(target, "target")?;
        self.upsert_edge(
            source,
            target,
            EdgeAttributes::new(link_type, description.trim()),
        );
        logging::log_mutation("add_or_update_edge", &format!("{} -> {}", source, target));
        Ok(())
    }

    /// Relabels `old` to `new` everywhere it appears.
    ///
    /// `old` is removed and `new` appended to the node order unless it already exists.
    /// When `new` exists the nodes merge and edges carried over from `old` overwrite
    /// `new`'s edges for the same ordered pair. An edge between `old` and `new` becomes a
    /// self-loop on `new`.
    pub fn rename_node(&mut self, old: &str, new: &str) -> Result<()> {
        let old = old.trim();
        let old_idx = self
            .position(old)
            .ok_or_else(|| GraphError::NodeNotFound(old.to_string()))?;
        let new = required(new, "new name")?;
        if old == new {
            return Ok(());
        }

        let outgoing = std::mem::take(&mut self.nodes[old_idx].outgoing);
        let incoming: Vec<(String, EdgeAttributes)> = self
            .nodes
            .iter()
            .filter_map(|n| n.edge_to(old).map(|attrs| (n.label.clone(), attrs.clone())))
            .collect();
        self.remove_at(old_idx);

        self.ensure_node(new);
        for (target, attrs) in outgoing {
            let target = if target == old { new } else { target.as_str() };
            self.upsert_edge(new, target, attrs);
        }
        for (source, attrs) in incoming {
            self.upsert_edge(&source, new, attrs);
        }
        logging::log_mutation("rename_node", &format!("{} => {}", old, new));
        Ok(())
    }

    /// Removes `name` and every edge into or out of it.
    pub fn delete_node(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        let idx = self
            .position(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))?;
        self.remove_at(idx);
        logging::log_mutation("delete_node", name);
        Ok(())
    }

    /// Overwrites the attributes of the existing edge `source -> target`.
    pub fn edit_edge(
        &mut self,
        source: &str,
        target: &str,
        link_type: LinkType,
        description: &str,
    ) -> Result<()> {
        let (source_idx, target) = self.require_edge(source, target)?;
        let attrs = self.nodes[source_idx]
            .outgoing
            .iter_mut()
            .find(|(t, _)| t == target)
            .map(|(_, attrs)| attrs)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: source.trim().to_string(),
                to: target.to_string(),
            })?;
        *attrs = EdgeAttributes::new(link_type, description.trim());
        logging::log_mutation("edit_edge", &format!("{} -> {}", source.trim(), target));
        Ok(())
    }

    /// Removes exactly the directed edge `source -> target`; both nodes stay.
    pub fn delete_edge(&mut self, source: &str, target: &str) -> Result<()> {
        let (source_idx, target) = self.require_edge(source, target)?;
        self.nodes[source_idx].outgoing.retain(|(t, _)| t != target);
        logging::log_mutation("delete_edge", &format!("{} -> {}", source.trim(), target));
        Ok(())
    }

    /// All simple paths `source -> target`, directed and over the undirected view.
    ///
    /// No path is a normal, empty result. `find_paths(x, x)` yields `[[x]]` in both.
    pub fn find_paths(&self, source: &str, target: &str) -> Result<Connectivity> {
        let (source_idx, target_idx) = self.require_pair(source, target)?;
        let connectivity = Connectivity {
            directed: self.labels(paths::all_simple_paths(
                &self.directed_adjacency(),
                source_idx,
                target_idx,
            )),
            undirected: self.labels(paths::all_simple_paths(
                &self.undirected_adjacency(),
                source_idx,
                target_idx,
            )),
        };
        logging::log_paths_found(
            &self.nodes[source_idx].label,
            &self.nodes[target_idx].label,
            connectivity.directed.len(),
            connectivity.undirected.len(),
        );
        Ok(connectivity)
    }

    /// Stored rows as `(label, outgoing edges)`, in node order, without label lookups.
    pub(crate) fn rows(&self) -> impl Iterator<Item = (&str, &[(String, EdgeAttributes)])> + '_ {
        self.nodes
            .iter()
            .map(|n| (n.label.as_str(), n.outgoing.as_slice()))
    }

    /// Appends `label` if absent; returns its index.
    pub(crate) fn ensure_node(&mut self, label: &str) -> usize {
        match self.position(label) {
            Some(idx) => idx,
            None => {
                self.nodes.push(NodeEntry::new(label));
                self.nodes.len() - 1
            }
        }
    }

    /// Sets `source -> target` to `attrs`, creating endpoints as needed. An existing
    /// edge keeps its position among the source's outgoing edges.
    pub(crate) fn upsert_edge(&mut self, source: &str, target: &str, attrs: EdgeAttributes) {
        let source_idx = self.ensure_node(source);
        self.ensure_node(target);
        let outgoing = &mut self.nodes[source_idx].outgoing;
        match outgoing.iter_mut().find(|(t, _)| t == target) {
            Some((_, existing)) => *existing = attrs,
            None => outgoing.push((target.to_string(), attrs)),
        }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.label == label)
    }

    fn remove_at(&mut self, idx: usize) {
        let removed = self.nodes.remove(idx);
        for node in &mut self.nodes {
            node.outgoing.retain(|(t, _)| *t != removed.label);
        }
    }

    fn require_pair(&self, source: &str, target: &str) -> Result<(usize, usize)> {
        let (source, target) = (source.trim(), target.trim());
        match (self.position(source), self.position(target)) {
            (Some(s), Some(t)) => Ok((s, t)),
            (s, t) => {
                let mut missing = Vec::new();
                if s.is_none() {
                    missing.push(source.to_string());
                }
                if t.is_none() && (target != source || s.is_some()) {
                    missing.push(target.to_string());
                }
                Err(GraphError::NodesNotFound { missing })
            }
        }
    }

    /// Checks both nodes and the edge; returns the source index and trimmed target.
    fn require_edge<'a>(&self, source: &str, target: &'a str) -> Result<(usize, &'a str)> {
        let (source_idx, _) = self.require_pair(source, target)?;
        let target = target.trim();
        if self.nodes[source_idx].edge_to(target).is_none() {
            return Err(GraphError::EdgeNotFound {
                from: source.trim().to_string(),
                to: target.to_string(),
            });
        }
        Ok((source_idx, target))
    }

    fn directed_adjacency(&self) -> Vec<Vec<usize>> {
        self.nodes
            .iter()
            .map(|node| {
                node.outgoing
                    .iter()
                    .filter_map(|(target, _)| self.position(target))
                    .collect()
            })
            .collect()
    }

    /// Undirected view: neighbors in the order edges are met walking nodes, then their
    /// outgoing edges, in insertion order.
    fn undirected_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for (u, node) in self.nodes.iter().enumerate() {
            for (target, _) in &node.outgoing {
                let Some(v) = self.position(target) else {
                    continue;
                };
                if !adjacency[u].contains(&v) {
                    adjacency[u].push(v);
                }
                if !adjacency[v].contains(&u) {
                    adjacency[v].push(u);
                }
            }
        }
        adjacency
    }

    fn labels(&self, paths: Vec<Vec<usize>>) -> Vec<Vec<String>> {
        paths
            .into_iter()
            .map(|path| path.into_iter().map(|i| self.nodes[i].label.clone()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_animal_thing() -> SemanticGraph {
        let mut g = SemanticGraph::new();
        g.add_or_update_edge("Cat", "Animal", LinkType::Generative, "cat is an animal")
            .unwrap();
        g.add_or_update_edge("Animal", "Thing", LinkType::Generative, "")
            .unwrap();
        g
    }

    fn path(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    /// **Scenario**: First edge on an empty graph creates both endpoints in order of appearance.
    #[test]
    fn add_edge_creates_endpoints_in_order() {
        let mut g = SemanticGraph::new();
        g.add_or_update_edge("Cat", "Animal", LinkType::Generative, "cat is an animal")
            .unwrap();
        assert_eq!(g.list_nodes(), vec!["Cat", "Animal"]);
        assert_eq!(
            g.edge("Cat", "Animal"),
            Some(&EdgeAttributes::new(LinkType::Generative, "cat is an animal"))
        );
        assert_eq!(g.edge("Animal", "Cat"), None);
    }

    #[test]
    fn add_edge_trims_inputs() {
        let mut g = SemanticGraph::new();
        g.add_or_update_edge("  Cat ", "\tAnimal", LinkType::Causal, "  why  ")
            .unwrap();
        assert_eq!(g.list_nodes(), vec!["Cat", "Animal"]);
        assert_eq!(g.edge("Cat", "Animal").unwrap().description, "why");
    }

    #[test]
    fn add_edge_rejects_blank_endpoints() {
        let mut g = SemanticGraph::new();
        assert_eq!(
            g.add_or_update_edge("  ", "B", LinkType::Generative, ""),
            Err(GraphError::Validation { field: "source" })
        );
        assert_eq!(
            g.add_or_update_edge("A", "", LinkType::Generative, ""),
            Err(GraphError::Validation { field: "target" })
        );
        assert!(g.is_empty());
    }

    /// **Scenario**: Adding an existing pair overwrites attributes without duplicating the edge.
    #[test]
    fn add_edge_overwrites_existing_pair() {
        let mut g = cat_animal_thing();
        g.add_or_update_edge("Cat", "Animal", LinkType::Possessive, "changed")
            .unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(
            g.edge("Cat", "Animal"),
            Some(&EdgeAttributes::new(LinkType::Possessive, "changed"))
        );
    }

    #[test]
    fn create_node_is_idempotent() {
        let mut g = SemanticGraph::new();
        assert_eq!(g.create_node("Lonely"), Ok(true));
        assert_eq!(g.create_node(" Lonely "), Ok(false));
        assert_eq!(g.list_nodes(), vec!["Lonely"]);
        assert_eq!(
            g.create_node(" "),
            Err(GraphError::Validation { field: "node" })
        );
    }

    /// **Scenario**: Deleting a node drops it and every incident edge in both directions.
    #[test]
    fn delete_node_cascades_edges() {
        let mut g = cat_animal_thing();
        g.delete_node("Animal").unwrap();
        assert_eq!(g.list_nodes(), vec!["Cat", "Thing"]);
        assert_eq!(g.edge_count(), 0);
        assert!(g.edges().all(|e| e.source != "Animal" && e.target != "Animal"));
    }

    #[test]
    fn delete_missing_node_fails() {
        let mut g = cat_animal_thing();
        let before = g.clone();
        assert_eq!(
            g.delete_node("Dog"),
            Err(GraphError::NodeNotFound("Dog".into()))
        );
        assert_eq!(g, before);
    }

    /// **Scenario**: Renaming to a fresh label relabels incident edges with the same attributes and directions.
    #[test]
    fn rename_to_new_label_keeps_edges() {
        let mut g = cat_animal_thing();
        g.rename_node("Animal", "Creature").unwrap();
        assert!(!g.contains_node("Animal"));
        assert_eq!(g.list_nodes(), vec!["Cat", "Thing", "Creature"]);
        assert_eq!(
            g.edge("Cat", "Creature"),
            Some(&EdgeAttributes::new(LinkType::Generative, "cat is an animal"))
        );
        assert!(g.edge("Creature", "Thing").is_some());
        assert_eq!(g.edge_count(), 2);
    }

    /// **Scenario**: Renaming onto an existing node merges the edge sets; the renamed node's edges win.
    #[test]
    fn rename_onto_existing_merges_last_write_wins() {
        let mut g = SemanticGraph::new();
        g.add_or_update_edge("A", "X", LinkType::Generative, "from A")
            .unwrap();
        g.add_or_update_edge("B", "X", LinkType::Causal, "from B").unwrap();
        g.add_or_update_edge("B", "Y", LinkType::Causal, "only B").unwrap();
        g.add_or_update_edge("Z", "A", LinkType::Directive, "into A")
            .unwrap();

        g.rename_node("A", "B").unwrap();

        assert_eq!(g.list_nodes(), vec!["X", "B", "Y", "Z"]);
        assert_eq!(
            g.edge("B", "X"),
            Some(&EdgeAttributes::new(LinkType::Generative, "from A"))
        );
        assert_eq!(g.edge("B", "Y").unwrap().description, "only B");
        assert_eq!(g.edge("Z", "B").unwrap().description, "into A");
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn rename_edge_between_merged_nodes_becomes_self_loop() {
        let mut g = SemanticGraph::new();
        g.add_or_update_edge("A", "B", LinkType::Generative, "a to b")
            .unwrap();
        g.rename_node("A", "B").unwrap();
        assert_eq!(g.list_nodes(), vec!["B"]);
        assert_eq!(g.edge("B", "B").unwrap().description, "a to b");
    }

    #[test]
    fn rename_failures_leave_graph_unchanged() {
        let mut g = cat_animal_thing();
        let before = g.clone();
        assert_eq!(
            g.rename_node("Dog", "Wolf"),
            Err(GraphError::NodeNotFound("Dog".into()))
        );
        assert_eq!(
            g.rename_node("Cat", "  "),
            Err(GraphError::Validation { field: "new name" })
        );
        assert_eq!(g.rename_node("Cat", "Cat"), Ok(()));
        assert_eq!(g, before);
    }

    #[test]
    fn edit_edge_overwrites_in_place() {
        let mut g = cat_animal_thing();
        g.edit_edge("Animal", "Thing", LinkType::Finitive, "ends as")
            .unwrap();
        assert_eq!(
            g.edge("Animal", "Thing"),
            Some(&EdgeAttributes::new(LinkType::Finitive, "ends as"))
        );
        assert_eq!(g.edge("Thing", "Animal"), None);
    }

    #[test]
    fn edit_edge_reports_missing_nodes_and_edges() {
        let mut g = cat_animal_thing();
        assert_eq!(
            g.edit_edge("Cat", "Dog", LinkType::Generative, ""),
            Err(GraphError::NodesNotFound {
                missing: vec!["Dog".into()]
            })
        );
        assert_eq!(
            g.edit_edge("Thing", "Cat", LinkType::Generative, ""),
            Err(GraphError::EdgeNotFound {
                from: "Thing".into(),
                to: "Cat".into()
            })
        );
    }

    /// **Scenario**: Deleting a missing edge between existing nodes fails and changes nothing.
    #[test]
    fn delete_missing_edge_leaves_graph_unchanged() {
        let mut g = cat_animal_thing();
        let before = g.clone();
        assert_eq!(
            g.delete_edge("Cat", "Thing"),
            Err(GraphError::EdgeNotFound {
                from: "Cat".into(),
                to: "Thing".into()
            })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn delete_edge_keeps_nodes() {
        let mut g = cat_animal_thing();
        g.delete_edge("Cat", "Animal").unwrap();
        assert_eq!(g.list_nodes(), vec!["Cat", "Animal", "Thing"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn find_paths_single_edge() {
        let mut g = SemanticGraph::new();
        g.add_or_update_edge("Cat", "Animal", LinkType::Generative, "cat is an animal")
            .unwrap();
        let c = g.find_paths("Cat", "Animal").unwrap();
        assert_eq!(c.directed, vec![path(&["Cat", "Animal"])]);
        assert_eq!(c.undirected, vec![path(&["Cat", "Animal"])]);
    }

    /// **Scenario**: Direction matters for directed paths but not for the undirected view.
    #[test]
    fn find_paths_against_edge_direction() {
        let g = cat_animal_thing();
        let forward = g.find_paths("Cat", "Thing").unwrap();
        assert_eq!(forward.directed, vec![path(&["Cat", "Animal", "Thing"])]);

        let backward = g.find_paths("Thing", "Cat").unwrap();
        assert!(backward.directed.is_empty());
        assert_eq!(backward.undirected, vec![path(&["Thing", "Animal", "Cat"])]);
    }

    #[test]
    fn find_paths_to_self_is_trivial() {
        let g = cat_animal_thing();
        let c = g.find_paths("Animal", "Animal").unwrap();
        assert_eq!(c.directed, vec![path(&["Animal"])]);
        assert_eq!(c.undirected, vec![path(&["Animal"])]);
    }

    #[test]
    fn find_paths_between_disconnected_nodes_is_empty() {
        let mut g = cat_animal_thing();
        g.create_node("Island").unwrap();
        let c = g.find_paths("Cat", "Island").unwrap();
        assert!(c.directed.is_empty());
        assert!(c.undirected.is_empty());
    }

    #[test]
    fn find_paths_requires_both_nodes() {
        let g = cat_animal_thing();
        assert_eq!(
            g.find_paths("Dog", "Wolf"),
            Err(GraphError::NodesNotFound {
                missing: vec!["Dog".into(), "Wolf".into()]
            })
        );
        assert_eq!(
            g.find_paths("Dog", "Dog"),
            Err(GraphError::NodesNotFound {
                missing: vec!["Dog".into()]
            })
        );
    }

    /// **Scenario**: Every simple path is enumerated in depth-first, insertion order; cycles do not loop.
    #[test]
    fn find_paths_enumerates_all_simple_paths() {
        let mut g = SemanticGraph::new();
        for (s, t) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "A")] {
            g.add_or_update_edge(s, t, LinkType::Generative, "").unwrap();
        }
        let c = g.find_paths("A", "D").unwrap();
        assert_eq!(
            c.directed,
            vec![path(&["A", "B", "D"]), path(&["A", "C", "D"])]
        );
        assert_eq!(
            c.undirected,
            vec![
                path(&["A", "B", "D"]),
                path(&["A", "C", "D"]),
                path(&["A", "D"]),
            ]
        );
    }

    #[test]
    fn edges_iterates_in_node_then_insertion_order() {
        let g = cat_animal_thing();
        let pairs: Vec<(&str, &str)> = g.edges().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![("Cat", "Animal"), ("Animal", "Thing")]);
    }
}
