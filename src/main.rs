//! Interactive terminal loop for the roster manager.
//!
//! Reads line-oriented commands from stdin and drives the [`Staff`] store.
//! Errors from any operation are printed to stderr and the loop continues.

use std::io::{self, BufRead, Write};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use staff_roster::cli::{self, Command};
use staff_roster::roster::Staff;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut staff = Staff::new();

    loop {
        let Some(line) = prompt(">>> ")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        match cli::parse(&line) {
            Ok(Command::Exit) => break,
            Ok(Command::Add) => {
                if let Err(e) = add_worker(&mut staff) {
                    eprintln!("{e}");
                }
            }
            Ok(Command::List) => println!("{staff}"),
            Ok(Command::Select { period }) => {
                let selected = staff.select_now(period);
                if selected.is_empty() {
                    println!("No workers with the requested tenure.");
                } else {
                    for (idx, worker) in selected.iter().enumerate() {
                        println!("{:>4}: {}", idx + 1, worker.name);
                    }
                }
            }
            Ok(Command::Load { path }) => {
                if let Err(e) = staff.load(&path) {
                    eprintln!("{e}");
                }
            }
            Ok(Command::Save { path }) => {
                if let Err(e) = staff.save(&path) {
                    eprintln!("{e}");
                }
            }
            Ok(Command::Help) => print_help(),
            Err(e) => eprintln!("{e}"),
        }
    }

    debug!("interactive loop finished");
    Ok(())
}

/// Prompts for the new worker's fields and adds the record.
fn add_worker(staff: &mut Staff) -> io::Result<()> {
    let Some(name) = prompt("Name? ")? else {
        return Ok(());
    };
    let Some(post) = prompt("Post? ")? else {
        return Ok(());
    };
    let Some(year_text) = prompt("Joining year? ")? else {
        return Ok(());
    };

    match year_text.parse() {
        Ok(year) => staff.add(name, post, year),
        Err(_) => eprintln!("Invalid year: '{year_text}'"),
    }
    Ok(())
}

/// Writes a prompt and reads one trimmed line, or `None` on end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_help() {
    println!("Commands:");
    println!("  add             - add a worker;");
    println!("  list            - print the roster;");
    println!("  select <period> - print workers with at least <period> years of tenure;");
    println!("  load <path>     - load the roster from a file;");
    println!("  save <path>     - save the roster to a file;");
    println!("  help            - show this summary;");
    println!("  exit            - quit.");
}
