//! Seed import command
//!
//! Usage: pokedex seed import <PATH>

use clap::{Args, Subcommand};
use pokedex_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs, db: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, db),
    }
}

/// Execute seed import
fn execute_import(args: ImportArgs, db: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::open_pool(db)?;
    let mut conn = pool.acquire()?;

    let seed_files = if args.path.is_dir() {
        // Import directory of seeds (sorted for determinism)
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let EngineCommandResult::SeedImported(summary) = apply_engine_command(
            EngineCommand::SeedImport { path: seed_file },
            &mut conn,
        )?;
        println!(
            "✓ Imported {} records (digest: {})",
            summary.rows_written, summary.seed_digest
        );
    }

    Ok(())
}
