// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A ready-made configuration carrying only the verbose flag.
//!
//! [`DiagConfig`] covers the four combinations of mutability and output
//! stream with one type:
//!
//! | | stderr | stdout |
//! |---|---|---|
//! | frozen | `FrozenConfig::new` | `FrozenConfig::stdout` |
//! | unfrozen | `UnfrozenConfig::new` | `UnfrozenConfig::stdout` |
//!
//! The stream is fixed at construction. A frozen config never changes;
//! [`DiagConfig::with_verbose`] returns an updated copy instead.

use std::marker::PhantomData;

use crate::diag::ConfigDiag;
use crate::error::{Error, Result};
use crate::target::OutputTarget;

mod sealed {
    pub trait Sealed {}
}

/// Whether a [`DiagConfig`] accepts writes after construction.
pub trait Mutability: sealed::Sealed {
    const FROZEN: bool;
}

/// Marker: fields are fixed after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Frozen;

/// Marker: fields may be reassigned in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unfrozen;

impl sealed::Sealed for Frozen {}
impl sealed::Sealed for Unfrozen {}

impl Mutability for Frozen {
    const FROZEN: bool = true;
}

impl Mutability for Unfrozen {
    const FROZEN: bool = false;
}

/// Runtime configuration with a verbose flag and a bound output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagConfig<M: Mutability = Frozen> {
    verbose: bool,
    target: OutputTarget,
    _mutability: PhantomData<M>,
}

pub type FrozenConfig = DiagConfig<Frozen>;
pub type UnfrozenConfig = DiagConfig<Unfrozen>;

impl<M: Mutability> DiagConfig<M> {
    /// Diagnostics go to the standard error stream.
    pub fn new(verbose: bool) -> Self {
        Self::with_target(verbose, OutputTarget::Stderr)
    }

    /// Diagnostics go to the standard output stream.
    pub fn stdout(verbose: bool) -> Self {
        Self::with_target(verbose, OutputTarget::Stdout)
    }

    pub fn with_target(verbose: bool, target: OutputTarget) -> Self {
        Self {
            verbose,
            target,
            _mutability: PhantomData,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn output_target(&self) -> OutputTarget {
        self.target
    }

    pub fn is_frozen(&self) -> bool {
        M::FROZEN
    }

    /// Reassign the verbose flag in place.
    ///
    /// Fails with [`Error::Frozen`] on a frozen config, leaving it unchanged.
    pub fn try_set_verbose(&mut self, verbose: bool) -> Result<()> {
        if M::FROZEN {
            tracing::debug!(verbose, "rejected write to frozen configuration");
            return Err(Error::Frozen { field: "verbose" });
        }
        self.verbose = verbose;
        Ok(())
    }
}

impl DiagConfig<Frozen> {
    /// A copy with the verbose flag replaced and the same output stream.
    #[must_use]
    pub fn with_verbose(&self, verbose: bool) -> Self {
        Self { verbose, ..*self }
    }
}

impl DiagConfig<Unfrozen> {
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}

impl<M: Mutability> Default for DiagConfig<M> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<M: Mutability> ConfigDiag for DiagConfig<M> {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn output_target(&self) -> OutputTarget {
        self.target
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
