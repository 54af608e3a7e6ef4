//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the cfg-diag binary per variant.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Returns a Command configured to run the cfg-diag binary with a clean
/// environment for the variables it reads.
pub fn cfg_diag_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cfg-diag"));
    cmd.env_remove("CFG_DIAG_VERBOSE");
    cmd.env_remove("CFG_DIAG_LOG");
    cmd
}

/// The four configuration variants: mutability x output stream.
#[derive(Debug, Clone, Copy)]
pub enum Variant {
    Frozen,
    FrozenStdout,
    Unfrozen,
    UnfrozenStdout,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Frozen,
        Variant::FrozenStdout,
        Variant::Unfrozen,
        Variant::UnfrozenStdout,
    ];

    pub fn is_frozen(self) -> bool {
        matches!(self, Variant::Frozen | Variant::FrozenStdout)
    }

    pub fn to_stdout(self) -> bool {
        matches!(self, Variant::FrozenStdout | Variant::UnfrozenStdout)
    }

    /// A command running this variant, without the verbose flag.
    pub fn cmd(self) -> Command {
        let mut cmd = cfg_diag_cmd();
        if self.to_stdout() {
            cmd.arg("--stdout");
        }
        if !self.is_frozen() {
            cmd.arg("--unfrozen");
        }
        cmd
    }
}
