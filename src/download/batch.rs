//! Batch downloads driven by a sources file.
//!
//! One job per line, `<url> <format> [<folder words...>]`, processed strictly
//! sequentially — one child process at a time, each awaited before the next
//! starts. The report distinguishes three buckets:
//!
//! - skipped: malformed lines (fewer than two tokens) and unrecognized URLs;
//!   nothing is spawned for these
//! - failed: disallowed/unknown formats and downloader failures
//! - succeeded: the child exited zero
//!
//! Counting disallowed formats as failures (instead of silently dropping the
//! line) is intentional: the line named a real platform, so the user meant to
//! download it.

use crate::core::config::Config;
use crate::core::error::AppError;
use crate::download::command::build_invocation;
use crate::download::executor::Downloader;
use crate::download::format::Format;
use crate::download::DownloadRequest;

/// One parsed line of the sources file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLine {
    pub url: String,
    pub format: String,
    /// Remaining tokens re-joined with spaces
    pub subfolder: Option<String>,
}

/// Split a sources-file line into url, format token, and optional subfolder.
///
/// Returns `None` for lines with fewer than two tokens (including blanks).
pub fn parse_line(line: &str) -> Option<BatchLine> {
    let mut tokens = line.split_whitespace();
    let url = tokens.next()?.to_string();
    let format = tokens.next()?.to_string();

    let rest: Vec<&str> = tokens.collect();
    let subfolder = if rest.is_empty() { None } else { Some(rest.join(" ")) };

    Some(BatchLine { url, format, subfolder })
}

/// Outcome counters for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    /// Number of lines that actually reached the downloader.
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Run every line of `contents` through classify → validate → build → execute.
pub async fn run_batch<D>(contents: &str, config: &Config, downloader: &D) -> BatchReport
where
    D: Downloader + ?Sized,
{
    let mut report = BatchReport::default();

    for raw in contents.lines() {
        let Some(line) = parse_line(raw) else {
            if !raw.trim().is_empty() {
                log::warn!("Skipping malformed line: {raw:?}");
            }
            report.skipped += 1;
            continue;
        };

        let format = match line.format.parse::<Format>() {
            Ok(f) => f,
            Err(e) => {
                log::warn!("{e} ({})", line.url);
                report.failed += 1;
                continue;
            }
        };

        let request = match DownloadRequest::new(&line.url, format, line.subfolder) {
            Ok(r) => r,
            Err(AppError::UnrecognizedSource(url)) => {
                log::warn!("Skipping unrecognized URL: {url}");
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                log::warn!("{e} ({})", line.url);
                report.failed += 1;
                continue;
            }
        };

        log::info!(
            "Downloading {} as {} ({})",
            request.url,
            request.format,
            request.subfolder.as_deref().unwrap_or("no subfolder")
        );

        let invocation = build_invocation(&request, config);
        match downloader.run(&invocation).await {
            Ok(()) => {
                log::info!("Download successful: {}", request.url);
                report.succeeded += 1;
            }
            Err(e) => {
                log::error!("Download failed for {}: {e}", request.url);
                report.failed += 1;
            }
        }
    }

    report
}
