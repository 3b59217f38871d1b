//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`]. Layout itself is
//! total over its input domain; errors only arise from out-of-domain input and
//! from the configuration and I/O surfaces around the engine.

use std::io;

use thiserror::Error;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Negative or non-finite geometry or spacing handed to the engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrellisError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
