//! Error types for Gridflow operations.
//!
//! Editing operations never fail: invalid or stale input is absorbed as an
//! ignored outcome (see [`crate::outcome`]). [`GridflowError`] covers the
//! surrounding concerns only, such as loading and validating configuration.

use thiserror::Error;

/// The main error type for Gridflow operations.
#[derive(Debug, Error)]
pub enum GridflowError {
    #[error("Configuration error: {0}")]
    Config(String),
}
