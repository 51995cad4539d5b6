//! Serializer for the graph data file (graph <-> bytes).
//!
//! The on-disk shape is an adjacency map:
//! `{ "<node>": { "<neighbor>": {"link_type": "...", "description": "..."} } }`.
//! Every node is a top-level key, with `{}` when it has no outgoing edges. Key order is
//! node order and each node's edge order, so a save/load round trip keeps listings stable.
//! Labels read from a file are trimmed like every other label; a blank one is corrupt data.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GraphError, Result};
use crate::graph::{EdgeAttributes, SemanticGraph};

/// Serializes and deserializes a [`SemanticGraph`] for the data file.
pub trait GraphSerializer {
    fn serialize(&self, graph: &SemanticGraph) -> Result<Vec<u8>>;
    fn deserialize(&self, bytes: &[u8]) -> Result<SemanticGraph>;
}

/// JSON adjacency-map serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdjacency;

impl GraphSerializer for JsonAdjacency {
    fn serialize(&self, graph: &SemanticGraph) -> Result<Vec<u8>> {
        serde_json::to_vec(graph).map_err(|e| GraphError::Persistence(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<SemanticGraph> {
        serde_json::from_slice(bytes).map_err(|e| GraphError::Persistence(e.to_string()))
    }
}

struct Outgoing<'a>(&'a [(String, EdgeAttributes)]);

impl Serialize for Outgoing<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (target, attrs) in self.0 {
            map.serialize_entry(target, attrs)?;
        }
        map.end()
    }
}

impl Serialize for SemanticGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.node_count()))?;
        for (label, edges) in self.rows() {
            map.serialize_entry(label, &Outgoing(edges))?;
        }
        map.end()
    }
}

fn label<E: de::Error>(raw: String) -> std::result::Result<String, E> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(E::custom("node label cannot be empty"));
    }
    if trimmed.len() == raw.len() {
        return Ok(raw);
    }
    Ok(trimmed.to_string())
}

/// Outgoing edges of one node as read from the file, in file order.
struct OutgoingEntries(Vec<(String, EdgeAttributes)>);

impl<'de> Deserialize<'de> for OutgoingEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OutgoingVisitor;

        impl<'de> Visitor<'de> for OutgoingVisitor {
            type Value = OutgoingEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping neighbor labels to edge attributes")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((target, attrs)) = access.next_entry::<String, EdgeAttributes>()? {
                    entries.push((label::<A::Error>(target)?, attrs));
                }
                Ok(OutgoingEntries(entries))
            }
        }

        deserializer.deserialize_map(OutgoingVisitor)
    }
}

struct AdjacencyVisitor;

impl<'de> Visitor<'de> for AdjacencyVisitor {
    type Value = SemanticGraph;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping node labels to their outgoing edges")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut rows = Vec::new();
        while let Some((key, outgoing)) = access.next_entry::<String, OutgoingEntries>()? {
            rows.push((label::<A::Error>(key)?, outgoing));
        }

        // Top-level keys first, in file order; neighbor-only labels follow as met.
        let mut graph = SemanticGraph::new();
        for (label, _) in &rows {
            graph.ensure_node(label);
        }
        for (label, OutgoingEntries(edges)) in rows {
            for (target, attrs) in edges {
                graph.upsert_edge(&label, &target, attrs);
            }
        }
        Ok(graph)
    }
}

impl<'de> Deserialize<'de> for SemanticGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(AdjacencyVisitor)
    }
}
