//! Optional overrides for a shell session (CLI flags or programmatic).
//!
//! Used by [`ShellConfig::apply_options`](super::ShellConfig::apply_options). Callers (the
//! binary or tests) build a `ShellOptions` and apply it to the env-based config.

use std::path::PathBuf;

use super::RenderMode;

/// Optional overrides: data file, render mode, DOT output path, verbosity.
///
/// All fields are optional; only set fields override the base config (from env).
#[derive(Clone, Debug, Default)]
pub struct ShellOptions {
    /// Override the JSON data file path.
    pub data_path: Option<PathBuf>,
    /// Override how the graph is shown after mutations.
    pub render: Option<RenderMode>,
    /// Override where the DOT renderer writes.
    pub dot_path: Option<PathBuf>,
    /// Enable debug logs; never disables what env enabled.
    pub verbose: bool,
}
