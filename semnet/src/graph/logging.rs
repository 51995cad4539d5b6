//! Logging utilities for graph mutations, queries and persistence.
//!
//! Emits `tracing` events when the `tracing` feature is enabled and falls back to stderr
//! otherwise.

use std::path::Path;

/// Log a successful in-memory mutation.
pub fn log_mutation(operation: &str, subject: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation = operation, subject = subject, "Graph mutated");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Graph mutated: {} {}", operation, subject);
}

/// Log the outcome of a connectivity query.
pub fn log_paths_found(source: &str, target: &str, directed: usize, undirected: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(source, target, directed, undirected, "Paths enumerated");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[DEBUG] Paths enumerated: {} -> {} directed={} undirected={}",
        source, target, directed, undirected
    );
}

/// Log a completed load.
pub fn log_loaded(path: &Path, nodes: usize, edges: usize) {
    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), nodes, edges, "Graph loaded");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[INFO] Graph loaded: {} ({} nodes, {} edges)",
        path.display(),
        nodes,
        edges
    );
}

/// Log that the data file was unusable and an empty graph was substituted.
pub fn log_load_warning(path: &Path, reason: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(path = %path.display(), reason, "Invalid graph data, starting empty");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] Invalid graph data in {}, starting empty: {}",
        path.display(),
        reason
    );
}

/// Log a completed save.
pub fn log_saved(path: &Path, nodes: usize, edges: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), nodes, edges, "Graph saved");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[DEBUG] Graph saved: {} ({} nodes, {} edges)",
        path.display(),
        nodes,
        edges
    );
}

/// Log a failed save; the in-memory graph is left as it was.
pub fn log_save_error(path: &Path, error: &crate::error::GraphError) {
    #[cfg(feature = "tracing")]
    tracing::error!(path = %path.display(), %error, "Graph save failed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Graph save failed: {}: {}", path.display(), error);
}
