//! `array-splice` — diff, project, or apply array splices as JSON.
//!
//! Usage:
//!   array-splice diff    < '{"old": [...], "current": [...]}'
//!   array-splice project < '{"array": [...], "records": [...]}'
//!   array-splice apply   < '{"previous": [...], "current": [...], "splices": [...]}'
//!
//! The input document is read from stdin; the result is written to stdout.
//! Log verbosity follows `RUST_LOG` (default `warn`) and goes to stderr.

use std::io::{self, Read, Write};

use array_splice::cli::{run, CliError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let command = match std::env::args().nth(1) {
        Some(command) => command,
        None => {
            eprintln!("{}", CliError::MissingCommand);
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&command, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
