//! Process execution for downloader invocations.
//!
//! `Downloader` is the seam between the pipeline and the operating system:
//! the single/batch flows are written against the trait so tests can swap in
//! a stub that records invocations instead of spawning anything.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::core::config;
use crate::core::error::AppError;
use crate::download::command::Invocation;

/// Executes a downloader invocation to completion.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Run the invocation, blocking until the child exits.
    ///
    /// The child's real exit status is propagated: a non-zero exit is
    /// `ProcessExitedNonZero`, a failed spawn is `ProcessSpawnFailed`.
    async fn run(&self, invocation: &Invocation) -> Result<(), AppError>;
}

/// Production `Downloader` that spawns the external binary.
///
/// stdout/stderr are inherited so the downloader's own progress output shows
/// up in the console as-is.
pub struct ProcessDownloader {
    timeout: Duration,
}

impl ProcessDownloader {
    pub fn new() -> Self {
        Self {
            timeout: config::download::process_timeout(),
        }
    }

    /// Override the process timeout (mostly for tests).
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ProcessDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for ProcessDownloader {
    async fn run(&self, invocation: &Invocation) -> Result<(), AppError> {
        ensure_working_dir(&invocation.working_dir).await?;

        log::info!("Running: {}", invocation.render());

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.working_dir)
            // Reap the child if the timeout fires and the status future is dropped
            .kill_on_drop(true);

        let status = match tokio::time::timeout(self.timeout, cmd.status()).await {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                return Err(AppError::ProcessSpawnFailed {
                    program: invocation.program.clone(),
                    source: e,
                })
            }
            Err(_) => {
                return Err(AppError::ProcessTimedOut {
                    program: invocation.program.clone(),
                    secs: self.timeout.as_secs(),
                })
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(AppError::ProcessExitedNonZero {
                program: invocation.program.clone(),
                code: status.code(),
            })
        }
    }
}

/// Create the destination directory (and optional subfolder) if absent.
async fn ensure_working_dir(dir: &Path) -> Result<(), AppError> {
    if !dir.exists() {
        log::debug!("Creating destination directory {}", dir.display());
        tokio::fs::create_dir_all(dir).await?;
    }
    Ok(())
}
