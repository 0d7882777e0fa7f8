//! Boxline -- a 4x4 dots-and-boxes engine implementing the DBI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the DBI (Dots-and-Boxes Interface) convention. Diagnostics go
//! to stderr through `tracing`; set `RUST_LOG` to change the level.

use std::io::{self, BufRead};

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use boxline::engine::Engine;
use boxline::protocol::parser::{parse_command, Command};

/// Runs the main DBI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        debug!(?cmd, "command");

        match cmd {
            Command::Dbi => engine.handle_dbi(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame => engine.new_game(),
            Command::Position { board } => {
                if let Err(e) = engine.set_position(&board) {
                    warn!(error = %e, "failed to parse board");
                }
            }
            Command::Go(params) => engine.handle_go(&mut out, params.depth)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
