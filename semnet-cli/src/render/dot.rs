//! Graphviz DOT export of the semantic network.
//!
//! Edge labels are the link type text, then the description on a second line when present.

use std::path::{Path, PathBuf};

use semnet::SemanticGraph;

use super::Renderer;

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// DOT document for `graph`, nodes and edges in insertion order.
pub fn to_dot(graph: &SemanticGraph) -> String {
    let mut out = String::from("digraph semantic_network {\n");
    for node in graph.nodes() {
        out.push_str(&format!("  {};\n", quote(node)));
    }
    for edge in graph.edges() {
        let attrs = edge.attributes;
        let label = if attrs.description.is_empty() {
            attrs.link_type.as_str().to_string()
        } else {
            format!("{}\n{}", attrs.link_type, attrs.description)
        };
        out.push_str(&format!(
            "  {} -> {} [label={}];\n",
            quote(edge.source),
            quote(edge.target),
            quote(&label)
        ));
    }
    out.push_str("}\n");
    out
}

/// Overwrites a `.dot` file on every render.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    path: PathBuf,
}

impl DotRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for DotRenderer {
    fn render(&mut self, graph: &SemanticGraph) -> std::io::Result<()> {
        std::fs::write(self.path(), to_dot(graph))?;
        tracing::debug!(path = %self.path().display(), "wrote dot file");
        Ok(())
    }
}
