//! User-facing outcome messages.
//!
//! Every executed command yields one or more notifications; store failures are turned into
//! error notifications that name the offending node or edge.

use std::fmt;

use semnet::{Connectivity, GraphError, LoadWarning};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// One message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(level: Level, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Level::Info, title, body)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Level::Warning, title, body)
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self::new(Level::Error, "Error", body)
    }

    pub fn success(body: impl Into<String>) -> Self {
        Self::info("Success", body)
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Error notification for a failed store call or rejected input.
    pub fn from_error(error: &GraphError) -> Self {
        let body = match error {
            GraphError::Validation { field: "new name" } => {
                "New node name cannot be empty!".to_string()
            }
            GraphError::Validation { .. } => "Node names cannot be empty!".to_string(),
            GraphError::NodeNotFound(name) => format!("Node '{}' does not exist.", name),
            GraphError::NodesNotFound { missing } => format!(
                "One or both nodes do not exist! Missing: {}",
                missing.join(", ")
            ),
            GraphError::EdgeNotFound { from, to } => {
                format!("There is no edge between {} and {}.", from, to)
            }
            GraphError::Persistence(reason) => format!("Failed to save the graph: {}", reason),
        };
        Self::error(body)
    }

    /// Startup warning for a corrupt data file.
    pub fn from_load_warning(warning: &LoadWarning) -> Self {
        Self::warning(
            "Warning",
            format!(
                "Invalid JSON data. Creating an empty graph.\n{}: {}",
                warning.path.display(),
                warning.reason
            ),
        )
    }

    /// Two notifications, directed then undirected, listing paths as `A -> B -> C`.
    pub fn from_connectivity(source: &str, target: &str, paths: &Connectivity) -> Vec<Self> {
        vec![
            Self::paths("Directed", "directed", source, target, &paths.directed),
            Self::paths("Undirected", "undirected", source, target, &paths.undirected),
        ]
    }

    fn paths(
        title: &str,
        kind: &str,
        source: &str,
        target: &str,
        paths: &[Vec<String>],
    ) -> Self {
        let title = format!("Connectivity ({})", title);
        if paths.is_empty() {
            return Self::info(
                title,
                format!("There are no {} paths between {} and {}.", kind, source, target),
            );
        }
        let listed: Vec<String> = paths.iter().map(|p| p.join(" -> ")).collect();
        Self::info(
            title,
            format!(
                "There exist {} paths between {} and {}:\n{}",
                kind,
                source,
                target,
                listed.join("\n")
            ),
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.body)
    }
}
