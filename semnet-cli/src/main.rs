//! `semnet` binary: parse arguments, run the shell, exit with its status.

use clap::Parser;
use semnet_cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
