//! Command parsing for the interactive loop.
//!
//! The terminal loop in the binary reads one line per command; this module
//! turns a line into a [`Command`] so the parsing is testable on its own.

use crate::error::{RosterError, RosterResult};

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a worker (the loop prompts for the fields).
    Add,
    /// Print the roster table.
    List,
    /// Print the workers with at least this many years of tenure.
    Select {
        /// The minimum tenure in years.
        period: i32,
    },
    /// Load the roster from an XML file.
    Load {
        /// The file to read.
        path: String,
    },
    /// Save the roster to an XML file.
    Save {
        /// The file to write.
        path: String,
    },
    /// Print the command summary.
    Help,
    /// Leave the loop.
    Exit,
}

/// Parses one input line into a [`Command`].
///
/// The command word is case-insensitive; arguments are kept verbatim.
///
/// # Errors
///
/// Returns [`RosterError::UnknownCommand`] for unrecognized input,
/// [`RosterError::MissingArgument`] when a required argument is absent, and
/// [`RosterError::InvalidNumber`] when the `select` period is not a number.
pub fn parse(line: &str) -> RosterResult<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "add" => Ok(Command::Add),
        "list" => Ok(Command::List),
        "select" => {
            if rest.is_empty() {
                return Err(RosterError::MissingArgument {
                    command: "select",
                    argument: "period",
                });
            }
            let period = rest.parse().map_err(|_| RosterError::InvalidNumber {
                field: "period",
                text: rest.to_string(),
            })?;
            Ok(Command::Select { period })
        }
        "load" => {
            if rest.is_empty() {
                return Err(RosterError::MissingArgument {
                    command: "load",
                    argument: "path",
                });
            }
            Ok(Command::Load {
                path: rest.to_string(),
            })
        }
        "save" => {
            if rest.is_empty() {
                return Err(RosterError::MissingArgument {
                    command: "save",
                    argument: "path",
                });
            }
            Ok(Command::Save {
                path: rest.to_string(),
            })
        }
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(RosterError::UnknownCommand {
            input: line.to_string(),
        }),
    }
}
