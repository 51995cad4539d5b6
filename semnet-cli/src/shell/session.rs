//! Shell session: runs commands against the store and refreshes the rendered view.
//!
//! Flow for a mutation: validate -> store call (which saves) -> render -> notify. A failed
//! step stops the flow and becomes a single error notification.

use semnet::{GraphError, GraphStore, LinkType};

use crate::render::Renderer;

use super::{Command, Notification};

/// Owns the store and the renderer for one process.
pub struct Shell {
    store: GraphStore,
    renderer: Box<dyn Renderer>,
}

impl Shell {
    pub fn new(store: GraphStore, renderer: Box<dyn Renderer>) -> Self {
        Self { store, renderer }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Notifications to show before the first command: a corrupt data file warning.
    pub fn startup_notifications(&self) -> Vec<Notification> {
        self.store
            .load_warning()
            .map(Notification::from_load_warning)
            .into_iter()
            .collect()
    }

    /// Runs one command. Never fails: every outcome is reported as notifications.
    pub fn execute(&mut self, command: Command) -> Vec<Notification> {
        let command = match command.validate() {
            Ok(command) => command,
            Err(e) => return vec![Notification::from_error(&e)],
        };
        tracing::debug!(?command, "executing");

        let refresh = command.is_mutation();
        match self.dispatch(command) {
            Ok(mut notes) => {
                if refresh {
                    notes.extend(self.render());
                }
                notes
            }
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                vec![Notification::from_error(&e)]
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Vec<Notification>, GraphError> {
        let note = match command {
            Command::AddEdge {
                source,
                target,
                link_type,
                description,
            } => {
                self.store
                    .add_or_update_edge(&source, &target, link_type, &description)?;
                Notification::success(format!("Edge between {} and {} saved.", source, target))
            }
            Command::CreateNode { name } => {
                if self.store.create_node(&name)? {
                    Notification::success(format!("Node '{}' created.", name))
                } else {
                    Notification::info("Info", format!("Node '{}' already exists.", name))
                }
            }
            Command::RenameNode { old, new } => {
                self.store.rename_node(&old, &new)?;
                tracing::debug!(%old, %new, "renamed");
                Notification::success(format!("Node '{}' edited.", old))
            }
            Command::DeleteNode { name } => {
                self.store.delete_node(&name)?;
                Notification::success(format!("Node '{}' deleted.", name))
            }
            Command::EditEdge {
                source,
                target,
                link_type,
                description,
            } => {
                self.store
                    .edit_edge(&source, &target, link_type, &description)?;
                Notification::success(format!("Edge between {} and {} edited.", source, target))
            }
            Command::DeleteEdge { source, target } => {
                self.store.delete_edge(&source, &target)?;
                Notification::success(format!("Edge between {} and {} deleted.", source, target))
            }
            Command::ListNodes => {
                let nodes = self.store.list_nodes();
                let body = if nodes.is_empty() {
                    "The graph is empty.".to_string()
                } else {
                    nodes.join("\n")
                };
                Notification::info("Nodes", body)
            }
            Command::FindPaths { source, target } => {
                let paths = self.store.find_paths(&source, &target)?;
                tracing::debug!(%source, %target, connected = paths.is_connected(), "paths");
                return Ok(Notification::from_connectivity(&source, &target, &paths));
            }
            Command::Show => return Ok(self.render().into_iter().collect()),
            Command::Save => {
                self.store.save()?;
                Notification::success(format!(
                    "Graph saved to {}.",
                    self.store.path().display()
                ))
            }
            Command::LinkTypes => {
                let body: Vec<String> = LinkType::ALL
                    .iter()
                    .map(|t| format!("{:<5} {:<14} {}", t.code(), t.name(), t.as_str()))
                    .collect();
                Notification::info("Link types", body.join("\n"))
            }
        };
        Ok(vec![note])
    }

    /// Redraws the graph; a failure is a warning since the data is already saved.
    fn render(&mut self) -> Option<Notification> {
        match self.renderer.render(self.store.graph()) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "render failed");
                Some(Notification::warning(
                    "Warning",
                    format!("Failed to render the graph: {}", e),
                ))
            }
        }
    }
}
