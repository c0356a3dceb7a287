//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error types and miette's
//! rich diagnostic formatting. Script errors carry the script source and the
//! byte span of the offending TOML, which miette renders as an annotated
//! snippet; every other error is rendered as a plain message.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use crate::CliError;

/// Adapter for a single CLI error.
pub struct ErrorAdapter<'a> {
    /// The wrapped error
    err: &'a CliError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a CliError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            CliError::Io(_) => "gridflow::io",
            CliError::Gridflow(_) | CliError::Config(_) => "gridflow::config",
            CliError::Script { .. } => "gridflow::script",
            CliError::Output(_) => "gridflow::output",
        };
        Some(Box::new(code) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            CliError::Script { .. } => Some(Box::new(
                "event scripts are TOML documents with an [[event]] array",
            ) as Box<dyn fmt::Display>),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            CliError::Script { src, span: Some(_), .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let CliError::Script {
            message,
            span: Some(span),
            ..
        } = self.err
        else {
            return None;
        };

        let span = SourceSpan::from(span.start..span.end);
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(message.clone()),
            span,
        ))))
    }
}

/// Render an error into a printable report.
pub fn render_report(err: &CliError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    if reporter
        .render_report(&mut writer, &ErrorAdapter::new(err))
        .is_err()
    {
        return err.to_string();
    }
    writer
}
