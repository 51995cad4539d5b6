//! Plain-text view: every node, then one line per edge with its link type and description.

use std::io::{self, Write};

use semnet::SemanticGraph;

use super::Renderer;

/// Formats the graph as text. Isolated nodes appear only in the node line.
///
/// ```text
/// Nodes (3): Cat, Animal, Lonely
/// Edges (1):
///   Cat -> Animal [(Gen) Генеративная связь | cat is an animal]
/// ```
pub fn format_graph(graph: &SemanticGraph) -> String {
    if graph.is_empty() {
        return "The graph is empty.\n".to_string();
    }
    let nodes: Vec<&str> = graph.nodes().collect();
    let mut out = format!("Nodes ({}): {}\n", nodes.len(), nodes.join(", "));
    out.push_str(&format!("Edges ({}):\n", graph.edge_count()));
    for edge in graph.edges() {
        let attrs = edge.attributes;
        if attrs.description.is_empty() {
            out.push_str(&format!(
                "  {} -> {} [{}]\n",
                edge.source, edge.target, attrs.link_type
            ));
        } else {
            out.push_str(&format!(
                "  {} -> {} [{} | {}]\n",
                edge.source, edge.target, attrs.link_type, attrs.description
            ));
        }
    }
    out
}

/// Writes [`format_graph`] output to any writer (stdout in the binary).
pub struct TextRenderer<W> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, graph: &SemanticGraph) -> io::Result<()> {
        self.out.write_all(format_graph(graph).as_bytes())?;
        self.out.flush()
    }
}
