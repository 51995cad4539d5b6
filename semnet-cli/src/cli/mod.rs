//! Command-line surface: clap argument types and the interactive line loop.

mod args;
mod interactive;

pub use args::{Cli, CliCommand, ShellLine};
pub use interactive::{run_interactive, split_words};
