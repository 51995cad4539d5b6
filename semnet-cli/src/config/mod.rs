//! Configuration types for running the shell.
//!
//! Re-exports [`ShellConfig`], [`ShellOptions`], [`RenderMode`] and config [`Error`].

mod shell_config;
mod shell_options;

pub use shell_config::{Error, RenderMode, ShellConfig};
pub use shell_options::ShellOptions;
