// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// cfg-diag error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Post-construction write to a field of a frozen configuration
    #[error("cannot assign to field '{field}' of a frozen configuration")]
    Frozen { field: &'static str },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),
}

/// Result type using cfg-diag Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the cfg-diag binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Diagnostics were processed
    Success = 0,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Frozen { .. } | Error::Argument(_) => ExitCode::ConfigError,
        }
    }
}

impl From<&anyhow::Error> for ExitCode {
    /// Errors raised by this crate keep their mapping; anything else is a bug.
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<Error>() {
            Some(err) => ExitCode::from(err),
            None => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
