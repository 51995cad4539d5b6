//! Clap definitions for the `semnet` binary and for interactive lines.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use semnet::LinkType;

use crate::config::{RenderMode, ShellOptions};
use crate::shell::Command;

#[derive(Parser, Debug)]
#[command(name = "semnet", version)]
#[command(about = "Semantic network: named nodes joined by typed, described links")]
pub struct Cli {
    /// JSON data file (default: $SEMNET_DATA_PATH or semantic_network.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// How to show the graph after changes: text, dot or none
    #[arg(long, global = true, value_name = "MODE")]
    pub render: Option<RenderMode>,

    /// Output file for --render dot
    #[arg(long, global = true, value_name = "PATH")]
    pub dot_path: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

impl Cli {
    /// Overrides for [`ShellConfig::apply_options`](crate::config::ShellConfig::apply_options).
    pub fn options(&self) -> ShellOptions {
        ShellOptions {
            data_path: self.data.clone(),
            render: self.render,
            dot_path: self.dot_path.clone(),
            verbose: self.verbose,
        }
    }
}

/// One line typed in interactive mode: a subcommand without the binary name.
#[derive(Parser, Debug)]
#[command(name = "semnet", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Add an edge (creating missing nodes) or overwrite an existing one
    AddEdge {
        source: String,
        target: String,
        /// Link type: full text, code (Gen) or name (Generative)
        #[arg(short, long, default_value_t = LinkType::default())]
        link_type: LinkType,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Add a node without edges
    CreateNode { name: String },
    /// Rename a node, keeping its edges
    RenameNode { old: String, new: String },
    /// Delete a node and every edge touching it
    DeleteNode { name: String },
    /// Replace the link type and description of an existing edge
    EditEdge {
        source: String,
        target: String,
        #[arg(short, long)]
        link_type: LinkType,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete the edge source -> target
    DeleteEdge { source: String, target: String },
    /// List node names in insertion order
    ListNodes,
    /// Show directed and undirected simple paths between two nodes
    FindPaths { source: String, target: String },
    /// Render the graph
    Show,
    /// Write the graph to the data file
    Save,
    /// List the available link types
    LinkTypes,
    /// Read commands from stdin until quit, exit or end of input
    Interactive,
}

impl CliCommand {
    /// Shell command for this subcommand; `None` for `interactive`.
    pub fn into_command(self) -> Option<Command> {
        Some(match self {
            CliCommand::AddEdge {
                source,
                target,
                link_type,
                description,
            } => Command::AddEdge {
                source,
                target,
                link_type,
                description,
            },
            CliCommand::CreateNode { name } => Command::CreateNode { name },
            CliCommand::RenameNode { old, new } => Command::RenameNode { old, new },
            CliCommand::DeleteNode { name } => Command::DeleteNode { name },
            CliCommand::EditEdge {
                source,
                target,
                link_type,
                description,
            } => Command::EditEdge {
                source,
                target,
                link_type,
                description,
            },
            CliCommand::DeleteEdge { source, target } => Command::DeleteEdge { source, target },
            CliCommand::ListNodes => Command::ListNodes,
            CliCommand::FindPaths { source, target } => Command::FindPaths { source, target },
            CliCommand::Show => Command::Show,
            CliCommand::Save => Command::Save,
            CliCommand::LinkTypes => Command::LinkTypes,
            CliCommand::Interactive => return None,
        })
    }
}
