//! Error adapter for converting TrellisError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use trellis::TrellisError;

/// Adapter wrapping a [`TrellisError`] so it can be rendered by miette.
pub struct ErrorAdapter<'a> {
    err: &'a TrellisError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a TrellisError) -> Self {
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
            TrellisError::Io(_) => "trellis::io",
            TrellisError::InvalidArgument(_) => "trellis::invalid_argument",
            TrellisError::Config(_) => "trellis::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            TrellisError::Io(_) => return None,
            TrellisError::InvalidArgument(_) => {
                "item sizes, bounds and spacings must be finite and non-negative"
            }
            TrellisError::Config(_) => "check the TOML file against the documented keys",
        };
        Some(Box::new(help))
    }
}

/// Convert a [`TrellisError`] into a value miette can render.
pub fn to_reportable(err: &TrellisError) -> ErrorAdapter<'_> {
    ErrorAdapter::new(err)
}
