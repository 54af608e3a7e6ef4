// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The conditional diagnostic output capability.
//!
//! Any configuration type with a `verbose` flag gains `emit*` methods by
//! implementing [`ConfigDiag`]. Messages reach the bound stream only when
//! `verbose()` is true; otherwise nothing is formatted or written.

use std::io::{self, Write};

use crate::message::DiagnosticMessage;
use crate::target::{self, OutputTarget};

/// Conditional diagnostic output for a configuration holding a verbose flag.
///
/// ```
/// use cfg_diag::{ConfigDiag, OutputTarget};
///
/// struct Config {
///     path: std::path::PathBuf,
///     verbose: bool,
/// }
///
/// impl ConfigDiag for Config {
///     fn verbose(&self) -> bool {
///         self.verbose
///     }
///
///     fn output_target(&self) -> OutputTarget {
///         OutputTarget::Stdout
///     }
/// }
///
/// let cfg = Config { path: "fribble.txt".into(), verbose: false };
/// cfg.emit(|| format!("Processing {}", cfg.path.display()));
/// ```
pub trait ConfigDiag {
    /// Whether diagnostic messages should be output.
    fn verbose(&self) -> bool;

    /// The stream diagnostics go to. Implementors override this with a
    /// constant to bind the stream per type.
    fn output_target(&self) -> OutputTarget {
        OutputTarget::Stderr
    }

    /// Output the message produced by `message` if verbose.
    ///
    /// `message` is not called at all when verbose output is off.
    fn emit<F, S>(&self, message: F)
    where
        F: FnOnce() -> S,
        S: AsRef<str>,
    {
        let target = self.output_target();
        if !self.verbose() {
            tracing::trace!(%target, "diagnostic suppressed");
            return;
        }
        let text = message();
        if let Err(err) = target.write_line(text.as_ref()) {
            tracing::debug!(%target, error = %err, "failed to write diagnostic");
            return;
        }
        tracing::trace!(%target, "diagnostic emitted");
    }

    /// Output an already formatted message if verbose.
    fn emit_literal(&self, message: &str) {
        self.emit(|| message)
    }

    /// Output a literal or lazily formatted message if verbose.
    fn emit_message(&self, message: DiagnosticMessage<'_>) {
        self.emit(move || message.resolve())
    }

    /// Like [`ConfigDiag::emit`], but write to `out` instead of the bound
    /// stream and report write errors to the caller.
    fn emit_to<W, F, S>(&self, out: &mut W, message: F) -> io::Result<()>
    where
        W: Write + ?Sized,
        F: FnOnce() -> S,
        S: AsRef<str>,
    {
        if !self.verbose() {
            return Ok(());
        }
        target::write_line(out, message().as_ref())
    }
}

impl<T: ConfigDiag> ConfigDiag for &T {
    fn verbose(&self) -> bool {
        (**self).verbose()
    }

    fn output_target(&self) -> OutputTarget {
        (**self).output_target()
    }
}

#[cfg(test)]
#[path = "diag_tests.rs"]
mod tests;
