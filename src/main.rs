//! Treecat CLI
//!
//! Scans a directory tree and concatenates the textual content of every
//! non-excluded file into a single annotated output file.

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use treecat::{ConcatenationWriter, ExclusionPolicy};

/// Concatenate a directory tree's text files into one annotated output
#[derive(Parser)]
#[command(name = "treecat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan
    root: PathBuf,

    /// Output file to create or overwrite
    output: PathBuf,

    /// Additional folder name to exclude (repeatable, added to defaults)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Additional file extension to exclude (repeatable, added to defaults)
    #[arg(long = "exclude-ext", value_name = "EXT")]
    exclude_exts: Vec<String>,

    /// Print the final stats as JSON instead of a confirmation line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Scanning {}", cli.root.display());
    info!("Writing to {}", cli.output.display());
    if !cli.exclude_dirs.is_empty() {
        info!("Extra excluded folders: {:?}", cli.exclude_dirs);
    }
    if !cli.exclude_exts.is_empty() {
        info!("Extra excluded extensions: {:?}", cli.exclude_exts);
    }

    let policy = ExclusionPolicy::builder()
        .folders(cli.exclude_dirs)
        .extensions(cli.exclude_exts)
        .build();

    let writer = ConcatenationWriter::new(policy);
    match writer.run(&cli.root, &cli.output) {
        Ok(stats) => {
            if cli.json {
                match serde_json::to_string_pretty(&stats) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!("Failed to serialize stats: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("Successfully created {}", cli.output.display());
                println!("  Files processed: {}", stats.processed_files);
                println!("  Files skipped: {}", stats.skipped_files);
                println!("  Errors: {}", stats.errors);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Scan failed: {e}");
            ExitCode::FAILURE
        }
    }
}
