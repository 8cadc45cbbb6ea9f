//! rangehop CLI - copy a time window between console page addresses.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{classify, copy, history, inject, parse, paste};

#[derive(Parser)]
#[command(name = "rangehop")]
#[command(about = "Extract a time window from a console address and write it into another")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scheme tag an address classifies to
    Classify {
        /// The address to classify
        url: String,
    },
    /// Decode the time window an address currently displays
    Parse {
        /// The address to decode
        url: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Pin "now" to this epoch-millisecond instant (default: wall clock)
        #[arg(long)]
        at: Option<i64>,
    },
    /// Rewrite an address to display a chosen window
    Inject {
        /// The address to rewrite
        url: String,
        /// Window start (epoch ms or ISO-8601)
        #[arg(long)]
        start: String,
        /// Window end (epoch ms or ISO-8601)
        #[arg(long)]
        end: String,
    },
    /// Decode an address and remember its window
    Copy {
        /// The address to capture from
        url: String,
        /// Store file (default: ~/.rangehop/store.json)
        #[arg(long)]
        store: Option<PathBuf>,
        /// Human label recorded instead of the scheme tag
        #[arg(long)]
        label: Option<String>,
        /// Pin "now" to this epoch-millisecond instant (default: wall clock)
        #[arg(long)]
        at: Option<i64>,
    },
    /// Write the remembered window into an address
    Paste {
        /// The address to rewrite
        url: String,
        /// Store file (default: ~/.rangehop/store.json)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// List remembered windows, newest first
    History {
        /// Store file (default: ~/.rangehop/store.json)
        #[arg(long)]
        store: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rangehop=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify { url } => classify::run(url),
        Commands::Parse { url, json, at } => parse::run(url, json, at),
        Commands::Inject { url, start, end } => inject::run(url, start, end),
        Commands::Copy {
            url,
            store,
            label,
            at,
        } => copy::run(url, store, label, at),
        Commands::Paste { url, store } => paste::run(url, store),
        Commands::History { store, json } => history::run(store, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
