//! Command-line argument definitions for the Gridflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the event script to replay, where the
//! resulting snapshot goes, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the Gridflow replay tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the event script (TOML)
    #[arg(help = "Path to the event script")]
    pub input: String,

    /// Path to write the diagram snapshot to; stdout if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
