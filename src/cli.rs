//! Command-line argument parsing for the riffle inspection tool
//!
//! Supports:
//! - Printing the active bindings as a readable table
//! - Seeding a bindings file with the defaults
//! - Validating a bindings file against the wire format

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and manage reader key bindings
#[derive(Parser, Debug)]
#[command(name = "riffle", version, about = "Inspect and manage reader key bindings")]
pub struct CliArgs {
    /// Bindings file to operate on (defaults to the per-user config location)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the bindings (persisted, or the defaults if none exist)
    Show,
    /// Write the default bindings to the bindings file
    Seed {
        /// Overwrite an existing bindings file
        #[arg(long)]
        force: bool,
    },
    /// Parse the bindings file and report problems
    Check,
}
