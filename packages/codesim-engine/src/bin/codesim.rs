//! Codesim CLI
//!
//! Thin caller over [`CodesimEngine`]. Results go to stdout as pretty JSON,
//! logs go to stderr (`RUST_LOG`, default `info`).
//!
//! # Usage
//!
//! ```bash
//! # Score two files, with copied spans of the first
//! codesim pair alice_1_main.py bob_2_main.py --spans
//!
//! # Leaderboard for a submission directory
//! codesim batch uploads/ --threshold 60
//!
//! # List stored submissions
//! codesim submissions uploads/ --config codesim.yaml
//! ```

use clap::{Parser, Subcommand};
use codesim_engine::features::submission_store::decode_text;
use codesim_engine::{CodesimEngine, CodesimError, EngineConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "codesim")]
#[command(about = "Source-code similarity: pairwise scores, copied spans, batch leaderboards", long_about = None)]
struct Cli {
    /// YAML configuration file (`version: 1`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two source files
    Pair {
        /// First file (copied spans are taken from this one)
        a: PathBuf,

        /// Second file
        b: PathBuf,

        /// Also extract copied spans
        #[arg(long)]
        spans: bool,

        /// Minimum copied-span length in characters
        #[arg(long)]
        min_span: Option<usize>,
    },

    /// Compare every pair in a submission directory
    Batch {
        /// Submission directory
        dir: PathBuf,

        /// Match threshold in percent
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// List submissions stored in a directory
    Submissions {
        /// Submission directory
        dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            EngineConfig::from_yaml(path)?
        }
        None => EngineConfig::default(),
    };
    let engine = CodesimEngine::new(config)?;

    match cli.command {
        Commands::Pair {
            a,
            b,
            spans,
            min_span,
        } => {
            let text_a = read_source(&a)?;
            let text_b = read_source(&b)?;
            let result = if spans || min_span.is_some() {
                engine.score_pair_with_spans(&text_a, &text_b, min_span)?
            } else {
                engine.score_pair(&text_a, &text_b)
            };
            print_json(&result)?;
        }
        Commands::Batch { dir, threshold } => {
            print_json(&engine.compare_store(&dir, threshold)?)?;
        }
        Commands::Submissions { dir } => {
            print_json(&engine.list_submissions(&dir)?)?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String, CodesimError> {
    let bytes = std::fs::read(path)?;
    decode_text(&bytes)
        .map_err(|reason| CodesimError::submission(format!("{}: {}", path.display(), reason)))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
