//! semnet-cli library: the interaction shell over a [`semnet::GraphStore`].
//!
//! Reads config from env / .env and flags, opens the data file, runs one command (or an
//! interactive loop) and reports every outcome as a [`Notification`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use semnet::{GraphStore, LinkType};
//! use semnet_cli::render::NullRenderer;
//! use semnet_cli::{Command, Shell};
//!
//! # fn main() -> Result<(), semnet_cli::Error> {
//! let store = GraphStore::open("semantic_network.json")?;
//! let mut shell = Shell::new(store, Box::new(NullRenderer));
//! for note in shell.execute(Command::AddEdge {
//!     source: "Cat".into(),
//!     target: "Animal".into(),
//!     link_type: LinkType::Generative,
//!     description: String::new(),
//! }) {
//!     println!("{}", note);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod logging;
pub mod render;
mod run;
mod shell;

pub use cli::{Cli, CliCommand};
pub use config::{Error, RenderMode, ShellConfig, ShellOptions};
pub use logging::init_logging;
pub use run::{open_shell, print_notifications, run};
pub use shell::{Command, Level, Notification, Shell};

#[cfg(test)]
mod tests;
