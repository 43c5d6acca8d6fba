//! quizrun CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Randomized multiple-choice quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz session
    Play {
        /// Question bank (.json structured, anything else flat text)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Number of questions to ask (prompted interactively when omitted)
        #[arg(long)]
        num: Option<usize>,

        /// Only ask questions from this category
        #[arg(long)]
        category: Option<String>,

        /// Score history file
        #[arg(long)]
        history: Option<PathBuf>,

        /// Seed for reproducible selection and shuffling
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question bank and report problems
    Validate {
        /// Question bank to check
        #[arg(long)]
        bank: PathBuf,
    },

    /// Convert a flat-text bank to the structured JSON shape
    Convert {
        /// Flat-text input bank
        #[arg(long)]
        input: PathBuf,

        /// JSON output path
        #[arg(long)]
        output: PathBuf,
    },

    /// Show past session scores
    History {
        /// Score history file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Show only the most recent N sessions
        #[arg(long)]
        limit: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun_core=info".parse().unwrap())
                .add_directive("quizrun_history=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            bank,
            num,
            category,
            history,
            seed,
            config,
        } => commands::play::execute(bank, num, category, history, seed, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Convert { input, output } => commands::convert::execute(input, output),
        Commands::History {
            file,
            limit,
            config,
        } => commands::history::execute(file, limit, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
