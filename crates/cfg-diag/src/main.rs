// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cfg-diag CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use cfg_diag::cli::Cli;
use cfg_diag::{
    ConfigDiag, DiagConfig, DiagnosticMessage, Error, ExitCode, FrozenConfig, Mutability,
    UnfrozenConfig,
};

/// Tracing filter for the binary's own events; diagnostics are unaffected.
const LOG_ENV: &str = "CFG_DIAG_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = run().unwrap_or_else(|err| {
        eprintln!("cfg-diag: {err}");
        ExitCode::from(&err)
    });
    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    if cli.messages.is_empty() {
        return Err(Error::Argument("no diagnostic messages given".into()).into());
    }

    let target = cli.output_target();
    tracing::debug!(verbose = cli.verbose, %target, unfrozen = cli.unfrozen, "configured");

    if cli.unfrozen {
        let mut cfg = UnfrozenConfig::with_target(cli.verbose, target);
        reassign(&mut cfg, &cli)?;
        emit_all(&cfg, &cli);
    } else {
        let mut cfg = FrozenConfig::with_target(cli.verbose, target);
        reassign(&mut cfg, &cli)?;
        emit_all(&cfg, &cli);
    }

    Ok(ExitCode::Success)
}

fn reassign<M: Mutability>(cfg: &mut DiagConfig<M>, cli: &Cli) -> cfg_diag::Result<()> {
    match cli.set_verbose {
        Some(verbose) => cfg.try_set_verbose(verbose),
        None => Ok(()),
    }
}

fn emit_all<C: ConfigDiag>(cfg: &C, cli: &Cli) {
    for msg in &cli.messages {
        if cli.lazy {
            cfg.emit_message(DiagnosticMessage::lazy(|| msg.clone()));
        } else {
            cfg.emit_literal(msg);
        }
    }
}
