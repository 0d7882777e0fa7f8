//! Self-play game generation CLI.
//!
//! Measures the engine against a random opponent. Prints a summary to stderr
//! and one JSON result line per game to stdout.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 10)
//!   --opening N     Random opening plies before the engine searches (default: 30)
//!   --algorithm A   minimax or alphabeta (default: alphabeta)
//!   --depth N       Search depth bound 1-100 (default: 100)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --quiet         Suppress summary output

use std::env;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use boxline::search::MAX_DEPTH;
use boxline::selfplay::{self, SelfPlayConfig};

/// Parses the value following `flag`, exiting with usage on failure.
fn flag_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = flag_value(&args, i, "--games");
            }
            "--opening" => {
                i += 1;
                config.opening_plies = flag_value(&args, i, "--opening");
            }
            "--algorithm" => {
                i += 1;
                config.algorithm = flag_value(&args, i, "--algorithm");
            }
            "--depth" => {
                i += 1;
                config.depth = flag_value::<u32>(&args, i, "--depth").clamp(1, MAX_DEPTH);
            }
            "--threads" => {
                i += 1;
                config.threads = flag_value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = flag_value(&args, i, "--seed");
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !quiet {
        eprintln!(
            "Self-play: {} games, {} opening plies, {} depth {}, {} threads",
            config.num_games, config.opening_plies, config.algorithm, config.depth, config.threads
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("self-play failed: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        if let Err(e) = selfplay::print_summary(&games, &mut io::stderr()) {
            eprintln!("failed to print summary: {}", e);
        }
    }

    if let Err(e) = selfplay::write_jsonl(&games, &mut BufWriter::new(io::stdout().lock())) {
        eprintln!("failed to write results: {}", e);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --opening N      Random opening plies before the engine searches (default: 30)");
    eprintln!("  --algorithm A    minimax or alphabeta (default: alphabeta)");
    eprintln!("  --depth N        Search depth bound 1-100 (default: 100)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
