// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration with conditional diagnostic output.
//!
//! A configuration type that carries a `verbose` flag implements
//! [`ConfigDiag`] and gets `emit`, `emit_literal` and friends, which write a
//! diagnostic line to a fixed process stream only when verbose output was
//! requested. [`DiagConfig`] is a ready-made implementation in frozen and
//! unfrozen flavors.
//!
//! ```
//! use cfg_diag::{ConfigDiag, FrozenConfig};
//!
//! let cfg = FrozenConfig::new(false);
//! cfg.emit_literal("This will either appear or it will not");
//! cfg.emit(|| format!("expensive: {:?}", (1..4).collect::<Vec<_>>()));
//! ```

pub mod cli;
pub mod config;
pub mod diag;
pub mod error;
pub mod macros;
pub mod message;
pub mod target;

pub use config::{DiagConfig, Frozen, FrozenConfig, Mutability, Unfrozen, UnfrozenConfig};
pub use diag::ConfigDiag;
pub use error::{Error, ExitCode, Result};
pub use message::DiagnosticMessage;
pub use target::OutputTarget;

/// The cfg-diag library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
