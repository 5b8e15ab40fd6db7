//! Includeme CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "includeme")]
#[command(about = "Insert the #include and using lines a C/C++ symbol needs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./includeme.toml, then builtin tables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the canonical name and headers of a symbol
    Resolve {
        /// Symbol as typed, e.g. `cout` or `std::cout`
        token: String,

        /// Language mode
        #[arg(short, long, default_value = "cpp")]
        mode: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add the directives a symbol needs to a source file
    Insert {
        /// Source file to edit
        file: PathBuf,

        /// Symbol to include (or use --at)
        token: Option<String>,

        /// Take the symbol under the cursor at LINE:COLUMN (1-based)
        #[arg(long, value_name = "LINE:COLUMN", conflicts_with = "token")]
        at: Option<String>,

        /// Language mode (defaults to the one matching the file extension)
        #[arg(short, long)]
        mode: Option<String>,

        /// Print the edited file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// List configured modes and their tables
    Modes,
    /// Show index size and height per mode
    Stats {
        /// Only this mode
        mode: Option<String>,
    },
    /// Build a C++ table from a C table and a canonical C++ table
    Derive {
        /// C symbol table
        #[arg(long)]
        c: PathBuf,

        /// Canonical C++ symbol table
        #[arg(long)]
        cpp: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "includeme={level},includeme_core={level},includeme_tables={level},includeme_insert={level}",
            level = log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Includeme v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Resolve { token, mode, json } => {
            commands::resolve(cli.config, &token, &mode, json)
        }
        Commands::Insert {
            file,
            token,
            at,
            mode,
            dry_run,
        } => commands::insert(cli.config, file, token, at, mode, dry_run),
        Commands::Modes => commands::modes(cli.config),
        Commands::Stats { mode } => commands::stats(cli.config, mode),
        Commands::Derive { c, cpp, output } => commands::derive(c, cpp, output),
        Commands::Version => {
            println!("Includeme v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}
