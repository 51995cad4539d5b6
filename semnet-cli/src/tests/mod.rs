//! Unit tests for semnet-cli, organized by module.
//!
//! Tests are BDD-style with Given/When/Then doc comments and descriptive names.
//! Each submodule documents the behaviour under test.


use std::cell::RefCell;
use std::rc::Rc;

use semnet::{GraphStore, SemanticGraph};

use crate::render::Renderer;
use crate::shell::Shell;

/// Renderer that records the node list of every graph it was asked to draw.
#[derive(Clone, Default)]
pub(crate) struct RecordingRenderer {
    pub frames: Rc<RefCell<Vec<Vec<String>>>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, graph: &SemanticGraph) -> std::io::Result<()> {
        self.frames.borrow_mut().push(graph.list_nodes());
        Ok(())
    }
}

/// Renderer that always fails.
pub(crate) struct BrokenRenderer;

impl Renderer for BrokenRenderer {
    fn render(&mut self, _graph: &SemanticGraph) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "display unavailable"))
    }
}

/// Shell over a fresh data file in a temp dir, plus the recorder to inspect renders.
pub(crate) fn recording_shell() -> (tempfile::TempDir, Shell, RecordingRenderer) {
    let dir = tempfile::tempdir().unwrap();
    let store = GraphStore::open(dir.path().join("graph.json")).unwrap();
    let recorder = RecordingRenderer::default();
    let shell = Shell::new(store, Box::new(recorder.clone()));
    (dir, shell, recorder)
}
