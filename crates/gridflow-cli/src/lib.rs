//! CLI logic for the Gridflow replay tool.
//!
//! The tool plays the part of the input transport layer: it reads a script of
//! decoded editor events, feeds them to an [`EditorSession`] in order, and
//! writes a snapshot of the resulting diagram as TOML.

pub mod error_adapter;
pub mod script;

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::fs;

use log::{debug, info, warn};

use gridflow::{DiagramSnapshot, EditorSession, config::EditorConfig};

use script::ScriptEntry;

/// Summary of a replayed script.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    snapshot: DiagramSnapshot,
    applied: usize,
    ignored: usize,
    malformed: usize,
}

impl ReplayReport {
    /// Returns the diagram state after the last event.
    pub fn snapshot(&self) -> &DiagramSnapshot {
        &self.snapshot
    }

    /// Returns the number of events that changed the editor state.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Returns the number of well-formed events that were absorbed as no-ops.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Returns the number of entries that could not be decoded.
    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

/// Replay an event script against a fresh session.
///
/// Malformed entries are logged and skipped; replay continues with the next
/// entry.
///
/// # Errors
///
/// Returns [`CliError::Script`] if `source` is not a valid script document.
pub fn replay(source: &str, config: EditorConfig) -> Result<ReplayReport, CliError> {
    let entries = script::parse_script(source)?;
    let mut session = EditorSession::new(config);
    let (mut applied, mut ignored, mut malformed) = (0, 0, 0);

    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            ScriptEntry::Event(event) => {
                let outcome = session.dispatch(event);
                match outcome.ignore_reason() {
                    Some(reason) => {
                        ignored += 1;
                        debug!(index, event = event.name(), reason:% = reason; "Event ignored");
                    }
                    None => {
                        applied += 1;
                        debug!(index, event = event.name(); "Event applied");
                    }
                }
            }
            ScriptEntry::Malformed(message) => {
                malformed += 1;
                warn!(index, message = message.as_str(); "Skipping malformed event");
            }
        }
    }

    info!(applied, ignored, malformed; "Replay finished");

    Ok(ReplayReport {
        snapshot: session.snapshot(),
        applied,
        ignored,
        malformed,
    })
}

/// Run the Gridflow CLI application
///
/// This function replays the input script and writes the resulting
/// snapshot to the output file, or to stdout when no output is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script documents that are not valid TOML
/// - Snapshot serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input.as_str(); "Replaying event script");

    // Load configuration
    let config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let report = replay(&source, config)?;
    let rendered = toml::to_string_pretty(report.snapshot())
        .map_err(|err| CliError::Output(err.to_string()))?;

    match &args.output {
        Some(output) => {
            fs::write(output, rendered)?;
            info!(output_file = output.as_str(); "Snapshot written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
