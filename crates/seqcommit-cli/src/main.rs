//! seqcommit CLI - compute and inspect commitments of sequencer records.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{canonicalize, commit, u256, CommitKind, RecordKind};

#[derive(Parser)]
#[command(name = "seqcommit")]
#[command(about = "Canonical commitments for sequencer headers and NMT roots")]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "seqcommit_canonical=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the commitment of a JSON record
    Commit {
        /// Record type of the input
        #[arg(value_enum)]
        kind: CommitKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Strictly decode a JSON record and print its canonical JSON form
    Canonicalize {
        /// Record type of the input
        #[arg(value_enum)]
        kind: RecordKind,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Normalize a 0x-prefixed hex integer to its canonical form
    U256 {
        /// Integer text, e.g. 0x00FF
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Commit { kind, input, json } => commit::run(kind, input, json),
        Commands::Canonicalize { kind, input } => canonicalize::run(kind, input),
        Commands::U256 { value, json } => u256::run(value, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
