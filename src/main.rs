mod cli;
mod config;
mod display;
mod error;
mod models;
mod renderer;
mod store;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::JournalError;

#[derive(Parser)]
#[command(name = "prayer-journal")]
#[command(about = "Track and manage your prayer requests", long_about = None)]
#[command(after_help = "Examples:
  prayer-journal add \"Please heal my friend\" --category Health
  prayer-journal list
  prayer-journal list --active-only
  prayer-journal answered 1
  prayer-journal delete 2")]
struct Cli {
    /// Path to config file (defaults to prayer-journal.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Journal file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new prayer request
    Add {
        /// Prayer request text
        text: String,

        /// Category (e.g., Family, Health, Guidance)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List all prayers
    List {
        /// Show only active (unanswered) prayers
        #[arg(long)]
        active_only: bool,
    },
    /// Mark prayer as answered
    Answered {
        /// Prayer ID to mark as answered
        id: u32,
    },
    /// Delete a prayer
    Delete {
        /// Prayer ID to delete
        id: u32,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize prayer-journal.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = ctrlc::set_handler(|| {
        let cancelled = JournalError::Cancelled;
        eprintln!("\n{}", cancelled);
        std::process::exit(cancelled.exit_code());
    }) {
        tracing::warn!("Could not install interrupt handler: {}", e);
    }

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = run(command, cli.config, cli.file) {
        eprintln!("{}", e.report());
        std::process::exit(e.exit_code());
    }
}

fn run(
    command: Commands,
    config_path: Option<PathBuf>,
    file: Option<PathBuf>,
) -> error::Result<()> {
    let load = || cli::load_config(config_path.as_deref(), file.clone());

    match command {
        Commands::Add { text, category } => cli::add::run(&load()?, &text, category.as_deref()),
        Commands::List { active_only } => cli::list::run(&load()?, active_only),
        Commands::Answered { id } => cli::answered::run(&load()?, id),
        Commands::Delete { id } => cli::delete::run(&load()?, id),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    }
}
