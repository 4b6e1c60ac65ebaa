//! Command-line interface definitions for cnmdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the cnmdoc application
#[derive(Parser)]
#[command(name = "cnmdoc")]
#[command(version)]
#[command(about = "CNM structured document browser", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for cnmdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Render a document manifest as text
    Show {
        /// Path to the document manifest (TOML)
        file: PathBuf,

        /// Maximum block nesting depth to accept
        #[arg(long)]
        max_depth: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Load and walk a document without rendering, reporting schema violations
    Check {
        /// Path to the document manifest (TOML)
        file: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}
