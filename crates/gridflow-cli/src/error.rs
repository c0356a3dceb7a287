//! Error types for the CLI.

use std::{io, ops::Range};

use thiserror::Error;

use gridflow::GridflowError;

use crate::config::ConfigError;

/// Everything that can stop a replay.
///
/// Individual malformed events are not errors: they are skipped during
/// replay. Only a script that is not a readable TOML document at all ends
/// up here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Gridflow(#[from] GridflowError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid event script: {message}")]
    Script {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Failed to serialize snapshot: {0}")]
    Output(String),
}

impl CliError {
    /// Create a new `Script` error from a TOML decoding failure.
    pub fn new_script_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Script {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
