// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::target::OutputTarget;

/// Emit diagnostic messages through a verbose-gated configuration
#[derive(Parser)]
#[command(name = "cfg-diag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Diagnostic messages to emit, one line each (use `--` before a
    /// message that starts with `-`)
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Enable verbose output
    #[arg(
        long,
        short = 'v',
        env = "CFG_DIAG_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
    )]
    pub verbose: bool,

    /// Send diagnostics to the standard output stream
    #[arg(long)]
    pub stdout: bool,

    /// Allow reassigning fields after construction
    #[arg(long)]
    pub unfrozen: bool,

    /// Reassign the verbose flag after construction
    #[arg(long, value_name = "BOOL")]
    pub set_verbose: Option<bool>,

    /// Format each message through the callback form
    #[arg(long)]
    pub lazy: bool,
}

impl Cli {
    pub fn output_target(&self) -> OutputTarget {
        if self.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::Stderr
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
