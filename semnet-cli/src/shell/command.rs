//! Shell commands as plain values.
//!
//! A `Command` is built from raw user text (CLI arguments or an interactive line), then
//! [`Command::validate`] trims every field and rejects blank required ones before anything
//! reaches the store.

use semnet::{GraphError, LinkType};

/// One user request, independent of how it was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEdge {
        source: String,
        target: String,
        link_type: LinkType,
        description: String,
    },
    CreateNode {
        name: String,
    },
    RenameNode {
        old: String,
        new: String,
    },
    DeleteNode {
        name: String,
    },
    EditEdge {
        source: String,
        target: String,
        link_type: LinkType,
        description: String,
    },
    DeleteEdge {
        source: String,
        target: String,
    },
    ListNodes,
    FindPaths {
        source: String,
        target: String,
    },
    Show,
    Save,
    LinkTypes,
}

fn required(value: String, field: &'static str) -> Result<String, GraphError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GraphError::Validation { field });
    }
    Ok(trimmed.to_string())
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

impl Command {
    /// True for commands that change the graph and so trigger a re-render.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::AddEdge { .. }
                | Command::CreateNode { .. }
                | Command::RenameNode { .. }
                | Command::DeleteNode { .. }
                | Command::EditEdge { .. }
                | Command::DeleteEdge { .. }
        )
    }

    /// Trims all text fields; fails with `GraphError::Validation` naming the first blank
    /// required field.
    pub fn validate(self) -> Result<Self, GraphError> {
        Ok(match self {
            Command::AddEdge {
                source,
                target,
                link_type,
                description,
            } => Command::AddEdge {
                source: required(source, "source")?,
                target: required(target, "target")?,
                link_type,
                description: trimmed(description),
            },
            Command::CreateNode { name } => Command::CreateNode {
                name: required(name, "node")?,
            },
            Command::RenameNode { old, new } => Command::RenameNode {
                old: required(old, "node")?,
                new: required(new, "new name")?,
            },
            Command::DeleteNode { name } => Command::DeleteNode {
                name: required(name, "node")?,
            },
            Command::EditEdge {
                source,
                target,
                link_type,
                description,
            } => Command::EditEdge {
                source: required(source, "source")?,
                target: required(target, "target")?,
                link_type,
                description: trimmed(description),
            },
            Command::DeleteEdge { source, target } => Command::DeleteEdge {
                source: required(source, "source")?,
                target: required(target, "target")?,
            },
            Command::FindPaths { source, target } => Command::FindPaths {
                source: required(source, "source")?,
                target: required(target, "target")?,
            },
            other @ (Command::ListNodes | Command::Show | Command::Save | Command::LinkTypes) => {
                other
            }
        })
    }
}
