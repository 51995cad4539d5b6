//! Graph renderers: how the shell shows the graph after a mutation or on `show`.
//!
//! | Mode | Renderer | Output |
//! |------|----------|--------|
//! | `text` | [`TextRenderer`] | node list and edge lines on stdout |
//! | `dot` | [`DotRenderer`] | Graphviz document at the configured path |
//! | `none` | [`NullRenderer`] | nothing |

mod dot;
mod text;

pub use dot::{to_dot, DotRenderer};
pub use text::{format_graph, TextRenderer};

use semnet::SemanticGraph;

use crate::config::{RenderMode, ShellConfig};

/// Shows the current graph. Called with the saved state, so failures never affect data.
pub trait Renderer {
    fn render(&mut self, graph: &SemanticGraph) -> std::io::Result<()>;
}

/// Renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _graph: &SemanticGraph) -> std::io::Result<()> {
        Ok(())
    }
}

/// Renderer selected by `config.render`.
pub fn renderer_for(config: &ShellConfig) -> Box<dyn Renderer> {
    match config.render {
        RenderMode::Text => Box::new(TextRenderer::stdout()),
        RenderMode::Dot => Box::new(DotRenderer::new(config.dot_path.clone())),
        RenderMode::None => Box::new(NullRenderer),
    }
}
