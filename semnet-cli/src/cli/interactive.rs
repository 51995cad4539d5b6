//! Interactive mode: one command per line, parsed with the same clap subcommands.

use std::io::{BufRead, Write};

use clap::Parser;

use crate::shell::{Notification, Shell};

use super::ShellLine;

const PROMPT: &str = "semnet> ";

/// Splits a line into words. Single or double quotes group words; a backslash escapes the
/// next character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(next) => {
                    current.push(next);
                    in_word = true;
                }
                None => return Err("trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn write_notes<W: Write>(out: &mut W, notes: &[Notification]) -> std::io::Result<()> {
    for note in notes {
        writeln!(out, "{}", note)?;
    }
    Ok(())
}

/// Reads commands from `input` until `quit`, `exit` or end of input.
///
/// Parse errors and command failures are printed and the loop goes on.
pub fn run_interactive<R: BufRead, W: Write>(
    shell: &mut Shell,
    input: R,
    out: &mut W,
) -> std::io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                write!(out, "{}", PROMPT)?;
                out.flush()?;
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => {}
            Some("quit") | Some("exit") => return Ok(()),
            Some(_) => match ShellLine::try_parse_from(&words) {
                Ok(parsed) => match parsed.command.into_command() {
                    Some(command) => write_notes(out, &shell.execute(command))?,
                    None => writeln!(out, "Already in interactive mode.")?,
                },
                Err(e) => write!(out, "{}", e.render())?,
            },
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
