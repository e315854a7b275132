//! `keygen-worker` — isolated RSA key-pair generation binary entry point.
//!
//! Invocation: `keygen-worker <bits>`. The worker runs the same blocking
//! generation algorithm as the library and speaks a single-request protocol
//! over its standard streams:
//! - success: exactly one JSON key-pair document on stdout, exit 0;
//! - failure: one JSON failure report line on stderr, non-zero exit.
//!
//! Nothing but the key-pair document is ever written to stdout — all
//! diagnostics go to stderr so the parent can parse stdout as pure JSON.

mod config;
mod telemetry;

use std::io::Write;
use std::process::ExitCode;

use tracing::info;

use cipherkit::keygen::{generate_keys_sync, KeygenError};
use common::{KeyPair, KeySize, KeySizeError, WorkerFailure};

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: keygen-worker configuration invalid: {e}");
            return ExitCode::from(2);
        }
    };

    // -----------------------------------------------------------------------
    // 2. Telemetry (stderr only)
    // -----------------------------------------------------------------------
    if let Err(e) = telemetry::init(&cfg.log_level) {
        eprintln!("ERROR: {e}");
        return ExitCode::from(2);
    }
    info!(version = env!("CARGO_PKG_VERSION"), "keygen-worker starting");

    // -----------------------------------------------------------------------
    // 3. Generate and report
    // -----------------------------------------------------------------------
    match run() {
        Ok(pair) => emit_key_pair(&pair),
        Err(err) => emit_failure(&err),
    }
}

/// Parse the positional bit-size argument and generate the pair.
fn run() -> Result<KeyPair, KeygenError> {
    let arg = std::env::args().nth(1).ok_or(KeySizeError::Missing)?;
    let size = arg.parse::<KeySize>()?;
    info!(key_size = size.bits(), "generating key pair");
    generate_keys_sync(size.bits())
}

/// Write the key pair to stdout as one JSON document and exit 0.
fn emit_key_pair(pair: &KeyPair) -> ExitCode {
    let json = match serde_json::to_string(pair) {
        Ok(json) => json,
        Err(e) => {
            return emit_report(&WorkerFailure::new(
                "generation_failed",
                format!("failed to serialise key pair: {e}"),
            ));
        }
    };

    let mut stdout = std::io::stdout().lock();
    if stdout
        .write_all(json.as_bytes())
        .and_then(|()| stdout.flush())
        .is_err()
    {
        // The parent hung up; there is no one left to report to on stdout.
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Map a generation error to the wire failure report and exit non-zero.
fn emit_failure(err: &KeygenError) -> ExitCode {
    emit_report(&WorkerFailure::new(failure_code(err), err.to_string()))
}

fn emit_report(report: &WorkerFailure) -> ExitCode {
    match serde_json::to_string(report) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", report.message),
    }
    ExitCode::FAILURE
}

fn failure_code(err: &KeygenError) -> &'static str {
    match err {
        KeygenError::KeySize(KeySizeError::Missing) => "missing_key_size",
        KeygenError::KeySize(_) => "invalid_key_size",
        _ => "generation_failed",
    }
}
