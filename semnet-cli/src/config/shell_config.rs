//! Shell config: data file, render mode, DOT path, verbosity. Can be filled from env / .env.
//!
//! Interacts with [`ShellOptions`](super::ShellOptions), [`run`](crate::run) and the
//! renderers in [`render`](crate::render).

use std::path::PathBuf;
use std::str::FromStr;

use super::ShellOptions;

/// Error type used for config loading.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Data file name used when `SEMNET_DATA_PATH` is not set.
pub const DEFAULT_DATA_PATH: &str = "semantic_network.json";

/// DOT output used when `SEMNET_DOT_PATH` is not set.
pub const DEFAULT_DOT_PATH: &str = "semantic_network.dot";

/// How the graph is shown after every mutation and on `show`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Node list and one line per edge on stdout.
    #[default]
    Text,
    /// Graphviz DOT document written to the configured path.
    Dot,
    /// Nothing is rendered.
    None,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(RenderMode::Text),
            "dot" => Ok(RenderMode::Dot),
            "none" | "off" => Ok(RenderMode::None),
            other => Err(format!(
                "unknown render mode '{}'; expected text, dot or none",
                other
            )),
        }
    }
}

/// Shell config: data file, render mode, DOT output path, verbosity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// JSON adjacency file the graph is loaded from and saved to.
    pub data_path: PathBuf,
    /// Renderer used after mutations and by `show`.
    pub render: RenderMode,
    /// Output file for [`RenderMode::Dot`].
    pub dot_path: PathBuf,
    /// When true, show debug logs (mutations, saves, path queries).
    pub verbose: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            render: RenderMode::default(),
            dot_path: PathBuf::from(DEFAULT_DOT_PATH),
            verbose: false,
        }
    }
}

impl ShellConfig {
    /// Fill config from env vars (and .env). Call `dotenv::dotenv().ok()` first, as
    /// [`run`](crate::run) does.
    ///
    /// `SEMNET_DATA_PATH`, `SEMNET_RENDER` (text|dot|none), `SEMNET_DOT_PATH` and
    /// `SEMNET_VERBOSE` (1|true) are all optional. An unparseable `SEMNET_RENDER` is an error.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        let data_path = std::env::var("SEMNET_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);
        let render = match std::env::var("SEMNET_RENDER") {
            Ok(s) => s.parse::<RenderMode>().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("SEMNET_RENDER: {}", e),
                )
            })?,
            Err(_) => defaults.render,
        };
        let dot_path = std::env::var("SEMNET_DOT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.dot_path);
        let verbose = std::env::var("SEMNET_VERBOSE")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            data_path,
            render,
            dot_path,
            verbose,
        })
    }

    /// Apply optional overrides from `ShellOptions` to this config.
    ///
    /// Only set fields in `options` override; `verbose` can only turn logging on.
    pub fn apply_options(&mut self, options: &ShellOptions) {
        if let Some(path) = &options.data_path {
            self.data_path = path.clone();
        }
        if let Some(render) = options.render {
            self.render = render;
        }
        if let Some(path) = &options.dot_path {
            self.dot_path = path.clone();
        }
        if options.verbose {
            self.verbose = true;
        }
    }
}
