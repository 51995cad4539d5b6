//! Process entry: config from env and flags, logging, store, then one command or the
//! interactive loop.

use std::io::{self, Write};

use semnet::GraphStore;

use crate::cli::{run_interactive, Cli};
use crate::config::{Error, ShellConfig};
use crate::logging::init_logging;
use crate::render::renderer_for;
use crate::shell::{Level, Notification, Shell};

/// Opens the store described by `config` and wraps it in a shell with the configured renderer.
pub fn open_shell(config: &ShellConfig) -> Result<Shell, Error> {
    let store = GraphStore::open(&config.data_path)?;
    Ok(Shell::new(store, renderer_for(config)))
}

/// Prints notifications: errors and warnings to `err`, the rest to `out`.
pub fn print_notifications<O: Write, E: Write>(
    notes: &[Notification],
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    for note in notes {
        match note.level {
            Level::Info => writeln!(out, "{}", note)?,
            Level::Warning | Level::Error => writeln!(err, "{}", note)?,
        }
    }
    Ok(())
}

/// Runs the parsed command line. Returns the process exit code: 1 when any error
/// notification was produced, 0 otherwise.
pub fn run(cli: Cli) -> Result<i32, Error> {
    dotenv::dotenv().ok();
    let mut config = ShellConfig::from_env()?;
    config.apply_options(&cli.options());
    init_logging(config.verbose);
    tracing::debug!(data = %config.data_path.display(), render = ?config.render, "config");

    let mut shell = open_shell(&config)?;
    let mut out = io::stdout();
    let mut err = io::stderr();
    print_notifications(&shell.startup_notifications(), &mut out, &mut err)?;

    match cli.command.into_command() {
        Some(command) => {
            let notes = shell.execute(command);
            print_notifications(&notes, &mut out, &mut err)?;
            Ok(if notes.iter().any(Notification::is_error) {
                1
            } else {
                0
            })
        }
        None => {
            run_interactive(&mut shell, io::stdin().lock(), &mut out)?;
            Ok(0)
        }
    }
}
