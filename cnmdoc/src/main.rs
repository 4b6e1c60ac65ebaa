//! cnmdoc - CNM structured document browser
//!
//! A CLI tool for displaying and checking CNM documents loaded from
//! TOML manifests.

use anyhow::{Context, Result};
use clap::Parser;
use cnmdoc::cli::{Cli, Commands};
use cnmdoc::{manifest, renderer, text_exporter};
use std::path::PathBuf;

/// Main entry point for the cnmdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            file,
            max_depth,
            verbose,
        } => {
            handle_show_command(file, max_depth, verbose)?;
        }

        Commands::Check { file, verbose } => {
            handle_check_command(file, verbose)?;
        }
    }

    Ok(())
}

/// Initialize logging if verbose
fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }
}

/// Handle the show command
fn handle_show_command(file: PathBuf, max_depth: Option<usize>, verbose: bool) -> Result<()> {
    init_logging(verbose);

    let document = manifest::load(&file)
        .with_context(|| format!("Failed to load document manifest from {}", file.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match max_depth {
        Some(limit) => text_exporter::write_document_with_limit(&document, &mut out, limit),
        None => text_exporter::write_document(&document, &mut out),
    }
    .with_context(|| format!("Failed to render {}", file.display()))?;

    Ok(())
}

/// Handle the check command
fn handle_check_command(file: PathBuf, verbose: bool) -> Result<()> {
    init_logging(verbose);

    let document = manifest::load(&file)
        .with_context(|| format!("Failed to load document manifest from {}", file.display()))?;

    let records = renderer::render_blocks(&document.content)
        .with_context(|| format!("{} failed schema checks", file.display()))?;

    println!(
        "✓ {}: {} blocks, {} links, sitemap {}",
        file.display(),
        records.len(),
        document.links.len(),
        if document.sitemap.is_some() {
            "present"
        } else {
            "absent"
        }
    );

    Ok(())
}
