// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process stream selection for diagnostic output.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;

/// The process stream a configuration writes its diagnostics to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputTarget {
    /// Standard error stream.
    #[default]
    Stderr,
    /// Standard output stream.
    Stdout,
}

impl OutputTarget {
    pub fn name(self) -> &'static str {
        match self {
            OutputTarget::Stderr => "stderr",
            OutputTarget::Stdout => "stdout",
        }
    }

    /// Write `msg` plus a trailing newline to the bound stream.
    ///
    /// The stream is locked for the duration of the single write, so
    /// concurrent writers interleave at line granularity at best.
    pub fn write_line(self, msg: &str) -> io::Result<()> {
        match self {
            OutputTarget::Stderr => write_line(&mut io::stderr().lock(), msg),
            OutputTarget::Stdout => write_line(&mut io::stdout().lock(), msg),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn write_line<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    writeln!(out, "{msg}")
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
