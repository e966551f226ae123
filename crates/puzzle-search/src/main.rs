//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-search solve <puzzle.json> [options]
//!   puzzle-search solve --stdin [options]
//!
//! Options:
//!   --strategy <name>       depth-first or breadth-first (default: depth-first)
//!   --timeout <seconds>     Stop searching after this long (default: no limit)
//!   --max-expansions <n>    Stop after expanding this many states (default: no limit)
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use puzzle_search::{PuzzleDefinition, SolverConfig, Strategy};

#[derive(Parser)]
#[command(name = "puzzle-search")]
#[command(about = "Depth-first and breadth-first search for puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a path from the puzzle's initial state to a solved state
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Traversal order
        #[arg(long, value_enum, default_value_t = Strategy::DepthFirst)]
        strategy: Strategy,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum number of distinct states to expand
        #[arg(long)]
        max_expansions: Option<usize>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            timeout,
            max_expansions,
        } => {
            // Read puzzle JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error: failed to read from stdin: {}", e);
                    process::exit(1);
                }
                buffer
            } else if let Some(path) = file {
                match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        eprintln!("Error: failed to read {:?}: {}", path, e);
                        process::exit(1);
                    }
                }
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                process::exit(1);
            };

            let definition = match PuzzleDefinition::from_json(&json_content) {
                Ok(def) => def,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };

            let config = SolverConfig {
                strategy,
                timeout: timeout.map(Duration::from_secs),
                max_expansions,
            };
            debug!(?config, "solver configured");

            let report = match definition.solve(&config) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };

            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: failed to encode report: {}", e);
                    process::exit(1);
                }
            }

            // Exit with appropriate code
            process::exit(if report.solved { 0 } else { 1 });
        }
    }
}
