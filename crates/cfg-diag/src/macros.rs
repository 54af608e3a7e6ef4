// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting shorthand for lazy diagnostics.

/// Emit a `format!`-style diagnostic, formatting only when verbose.
///
/// # Example
/// ```
/// use cfg_diag::{FrozenConfig, diag};
///
/// let cfg = FrozenConfig::new(false);
/// diag!(cfg, "Here's the thing: {}", 42);
/// ```
#[macro_export]
macro_rules! diag {
    ($cfg:expr, $($arg:tt)+) => {
        $crate::ConfigDiag::emit(&$cfg, || ::std::format!($($arg)+))
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
