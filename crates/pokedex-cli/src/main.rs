//! Pokedex CLI
//!
//! Command-line interface for browsing a Pokedex database

use clap::{Parser, Subcommand};
use pokedex_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "pokedex")]
#[command(about = "Pokedex - Browse and filter Pokemon", long_about = None)]
struct Cli {
    /// Database file (overrides POKEDEX_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log to stderr with this profile: dev, prod
    #[arg(long, global = true, env = "POKEDEX_LOG")]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// List Pokemon matching filters, one page at a time
    List(commands::list::ListArgs),
    /// Show one Pokemon by id
    Get(commands::get::GetArgs),
    /// Show the observed range of every stat
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile);
    }

    let db = cli.db.as_deref();
    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args, db),
        Commands::List(args) => commands::list::execute(args, db),
        Commands::Get(args) => commands::get::execute(args, db),
        Commands::Stats(args) => commands::stats::execute(args, db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
