//! Parent side of the key-generation worker protocol.
//!
//! The asynchronous path delegates generation to an isolated `keygen-worker`
//! process: one worker per request, invoked with the requested bit size as
//! its single positional argument. On success the worker writes exactly one
//! JSON [`KeyPair`] document to stdout and exits 0; on failure it writes a
//! JSON [`WorkerFailure`] line to stderr and exits non-zero. Diagnostics only
//! ever appear on stderr, so stdout stays parseable as pure JSON.
//!
//! There is no shared memory and no cancellation: once spawned, the worker
//! runs to completion and the operation resolves exactly once. A caller that
//! stops awaiting simply discards the eventual result — imposing a timeout is
//! the caller's concern, not this module's.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::debug;

use common::{KeyPair, KeySize, WorkerFailure};

use super::KeygenError;

/// Environment variable overriding the worker executable path.
pub const WORKER_PATH_ENV: &str = "KEYGEN_WORKER";

/// Name of the worker executable when resolved from a directory or `$PATH`.
const WORKER_PROGRAM: &str = "keygen-worker";

/// Location of the worker executable.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    program: PathBuf,
}

impl WorkerConfig {
    /// Use an explicit worker executable path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the worker executable: the [`WORKER_PATH_ENV`] variable if
    /// set, else a `keygen-worker` binary next to the current executable,
    /// else a plain `$PATH` lookup.
    pub fn resolve() -> Self {
        if let Ok(path) = std::env::var(WORKER_PATH_ENV) {
            return Self::new(path);
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let sibling = dir.join(WORKER_PROGRAM);
                if sibling.is_file() {
                    return Self::new(sibling);
                }
            }
        }
        Self::new(WORKER_PROGRAM)
    }

    /// Path of the worker executable this configuration will spawn.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self::resolve()
    }
}

/// Generate an RSA key pair in an isolated worker process.
///
/// Resolves the worker via [`WorkerConfig::resolve`]. The result is the same
/// canonical [`KeyPair`] shape as [`super::generate_keys_sync`]; only the
/// `time` field differs between runs.
///
/// # Errors
///
/// Returns [`KeygenError::KeySize`] before spawning anything if `bits` is
/// invalid; [`KeygenError::Spawn`] if the worker cannot be launched; and
/// [`KeygenError::Worker`] / [`KeygenError::InvalidOutput`] if it fails or
/// emits something other than one key-pair document.
pub async fn generate_keys(bits: u32) -> Result<KeyPair, KeygenError> {
    generate_keys_with_config(&WorkerConfig::default(), bits).await
}

/// [`generate_keys`] with an explicit worker location.
///
/// # Errors
///
/// As [`generate_keys`].
pub async fn generate_keys_with_config(
    config: &WorkerConfig,
    bits: u32,
) -> Result<KeyPair, KeygenError> {
    // Validate locally so a bad size never costs a process spawn.
    let size = KeySize::new(bits)?;

    debug!(program = %config.program.display(), key_size = size.bits(), "spawning keygen worker");
    let output = Command::new(&config.program)
        .arg(size.bits().to_string())
        .kill_on_drop(false)
        .output()
        .await
        .map_err(KeygenError::Spawn)?;

    if !output.status.success() {
        return Err(KeygenError::Worker(failure_message(
            &output.stderr,
            &output.status,
        )));
    }

    let pair: KeyPair = serde_json::from_slice(&output.stdout)?;
    Ok(pair)
}

/// Run [`generate_keys`] on the current runtime and invoke `on_complete` with
/// the result before resolving.
///
/// The callback and the returned [`JoinHandle`] are two views of the same
/// operation: the handle resolves to exactly the value the callback observed.
pub fn generate_keys_with_callback<F>(bits: u32, on_complete: F) -> JoinHandle<Result<KeyPair, KeygenError>>
where
    F: FnOnce(&Result<KeyPair, KeygenError>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = generate_keys(bits).await;
        on_complete(&result);
        result
    })
}

/// Extract the most useful failure description from a dead worker.
///
/// The worker's final act on failure is a JSON [`WorkerFailure`] line on
/// stderr; scan for it newest-first so it wins over earlier diagnostic lines.
fn failure_message(stderr: &[u8], status: &std::process::ExitStatus) -> String {
    let text = String::from_utf8_lossy(stderr);
    for line in text.lines().rev() {
        if let Ok(report) = serde_json::from_str::<WorkerFailure>(line) {
            return format!("{}: {}", report.code, report.message);
        }
    }
    format!("worker exited with {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::KeySizeError;

    // End-to-end protocol tests (real worker binary, stdout purity, exit
    // codes) live in the keygen-worker crate's integration suite; these cover
    // the parent-side failure paths that need no worker at all.

    #[tokio::test]
    async fn invalid_size_fails_before_spawning() {
        let config = WorkerConfig::new("/nonexistent/keygen-worker");
        let err = generate_keys_with_config(&config, 1001).await.unwrap_err();
        assert!(matches!(
            err,
            KeygenError::KeySize(KeySizeError::Invalid(1001))
        ));
    }

    #[tokio::test]
    async fn missing_worker_reports_spawn_failure() {
        let config = WorkerConfig::new("/nonexistent/keygen-worker");
        let err = generate_keys_with_config(&config, 2048).await.unwrap_err();
        assert!(matches!(err, KeygenError::Spawn(_)));
    }

    #[test]
    fn explicit_program_wins_over_resolution() {
        let config = WorkerConfig::new("/opt/bin/keygen-worker");
        assert_eq!(config.program(), Path::new("/opt/bin/keygen-worker"));
    }

    #[cfg(unix)]
    #[test]
    fn failure_message_prefers_worker_report() {
        let stderr = concat!(
            "{\"timestamp\":\"t\",\"level\":\"INFO\",\"fields\":{\"message\":\"starting\"}}\n",
            "{\"code\":\"invalid_key_size\",\"message\":\"key size must be a positive multiple of 8, got 1001\"}\n",
        );
        let status = exit_status(1);
        let message = failure_message(stderr.as_bytes(), &status);
        assert!(message.starts_with("invalid_key_size:"));
        assert!(message.contains("1001"));
    }

    #[cfg(unix)]
    #[test]
    fn failure_message_falls_back_to_exit_status() {
        let status = exit_status(1);
        let message = failure_message(b"something went wrong\n", &status);
        assert!(message.contains("exit"));
    }

    #[cfg(unix)]
    fn exit_status(code: i32) -> std::process::ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code << 8)
    }
}
