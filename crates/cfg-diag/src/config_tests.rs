// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::Cell;

use super::*;
use yare::parameterized;

fn emitted<M: Mutability>(cfg: &DiagConfig<M>, msg: &str) -> (String, usize) {
    let calls = Cell::new(0);
    let mut buf = Vec::new();
    cfg.emit_to(&mut buf, || {
        calls.set(calls.get() + 1);
        msg
    })
    .unwrap();
    (String::from_utf8(buf).unwrap(), calls.get())
}

// =============================================================================
// Construction
// =============================================================================

#[parameterized(
    frozen_stderr = { FrozenConfig::new(true).output_target(), OutputTarget::Stderr },
    frozen_stdout = { FrozenConfig::stdout(true).output_target(), OutputTarget::Stdout },
    unfrozen_stderr = { UnfrozenConfig::new(true).output_target(), OutputTarget::Stderr },
    unfrozen_stdout = { UnfrozenConfig::stdout(true).output_target(), OutputTarget::Stdout },
)]
fn constructor_binds_target(actual: OutputTarget, expected: OutputTarget) {
    assert_eq!(actual, expected);
}

#[test]
fn default_is_quiet_frozen_stderr() {
    let cfg = DiagConfig::<Frozen>::default();
    assert!(!cfg.verbose());
    assert!(cfg.is_frozen());
    assert_eq!(cfg.output_target(), OutputTarget::Stderr);
}

#[test]
fn frozen_is_the_default_mutability() {
    let cfg: DiagConfig = DiagConfig::new(false);
    assert!(cfg.is_frozen());
    assert!(!UnfrozenConfig::new(false).is_frozen());
}

#[test]
fn with_target_accepts_either_stream() {
    let cfg = UnfrozenConfig::with_target(true, OutputTarget::Stdout);
    assert_eq!(cfg, UnfrozenConfig::stdout(true));
}

// =============================================================================
// Mutability
// =============================================================================

#[parameterized(
    stderr = { OutputTarget::Stderr },
    stdout = { OutputTarget::Stdout },
)]
fn frozen_rejects_reassignment(target: OutputTarget) {
    let mut cfg = FrozenConfig::with_target(false, target);
    let err = cfg.try_set_verbose(true).unwrap_err();
    assert!(matches!(err, Error::Frozen { field: "verbose" }));
    assert!(!cfg.verbose());
    assert_eq!(cfg.output_target(), target);
}

#[parameterized(
    stderr = { OutputTarget::Stderr },
    stdout = { OutputTarget::Stdout },
)]
fn unfrozen_accepts_reassignment(target: OutputTarget) {
    let mut cfg = UnfrozenConfig::with_target(false, target);
    cfg.try_set_verbose(true).unwrap();
    assert!(cfg.verbose());
    cfg.set_verbose(false);
    assert!(!cfg.verbose());
    assert_eq!(cfg.output_target(), target);
}

#[test]
fn with_verbose_returns_new_value_keeping_target() {
    let quiet = FrozenConfig::stdout(false);
    let loud = quiet.with_verbose(true);
    assert!(!quiet.verbose());
    assert!(loud.verbose());
    assert_eq!(loud.output_target(), OutputTarget::Stdout);
}

#[test]
fn reassignment_is_honored_by_later_emits() {
    let mut cfg = UnfrozenConfig::new(false);
    assert_eq!(emitted(&cfg, "first"), (String::new(), 0));
    cfg.set_verbose(true);
    assert_eq!(emitted(&cfg, "second"), ("second\n".to_string(), 1));
    cfg.set_verbose(false);
    assert_eq!(emitted(&cfg, "third"), (String::new(), 0));
}

#[test]
fn rejected_reassignment_keeps_emits_quiet() {
    let mut cfg = FrozenConfig::new(false);
    assert!(cfg.try_set_verbose(true).is_err());
    assert_eq!(emitted(&cfg, "still quiet"), (String::new(), 0));
}

// =============================================================================
// Output gating
// =============================================================================

#[parameterized(
    frozen_stderr = { emitted(&FrozenConfig::new(false), "X") },
    frozen_stdout = { emitted(&FrozenConfig::stdout(false), "X") },
    unfrozen_stderr = { emitted(&UnfrozenConfig::new(false), "X") },
    unfrozen_stdout = { emitted(&UnfrozenConfig::stdout(false), "X") },
)]
fn quiet_variants_write_nothing(result: (String, usize)) {
    assert_eq!(result, (String::new(), 0));
}

#[parameterized(
    frozen_stderr = { emitted(&FrozenConfig::new(true), "X") },
    frozen_stdout = { emitted(&FrozenConfig::stdout(true), "X") },
    unfrozen_stderr = { emitted(&UnfrozenConfig::new(true), "X") },
    unfrozen_stdout = { emitted(&UnfrozenConfig::stdout(true), "X") },
)]
fn verbose_variants_write_line(result: (String, usize)) {
    assert_eq!(result, ("X\n".to_string(), 1));
}

#[test]
fn quiet_config_never_runs_callback() {
    let cfg = UnfrozenConfig::stdout(false);
    cfg.emit(|| -> String { panic!("must not run") });
    cfg.emit_literal("This is not a diagnostic message.");
}
