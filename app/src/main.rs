#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InitStrategy, RulesStrategy, RunInput, RunStrategy, TableInput,
    TableStrategy, VersionStrategy,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "capture")]
#[command(about = "Bind named regex capture groups into records", long_about = None)]
struct Cli {
    /// Log binding decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the capture table of a pattern against a text
    Table {
        /// Regular expression with named groups
        #[arg(short, long)]
        pattern: String,

        /// Text to match
        #[arg(short, long)]
        text: String,

        /// Match case-insensitively
        #[arg(short = 'i', long)]
        ignore_case: bool,
    },
    /// Apply a configured rule and print the bound record
    Run {
        /// Rule name from the config file
        #[arg(short, long)]
        rule: String,

        /// Text to match
        #[arg(short, long)]
        text: String,

        /// Config file (default: ~/capture/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List configured rules
    Rules {
        /// Config file (default: ~/capture/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Table {
            pattern,
            text,
            ignore_case,
        } => TableStrategy.execute(TableInput {
            pattern,
            text,
            ignore_case,
        }),
        Commands::Run { rule, text, config } => {
            RunStrategy.execute(RunInput { rule, text, config })
        }
        Commands::Rules { config } => RulesStrategy.execute(config),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
