//! Command-line argument definitions for the Plumage CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the source root, output path,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Plumage diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the root of the source tree to scan
    #[arg(help = "Root folder of the source project")]
    pub root: String,

    /// Path to the output PlantUML file
    #[arg(short, long, default_value = "diagram.puml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
