//! Download pipeline: classify → validate format → build invocation → execute.
//!
//! The pieces are deliberately separate so each is testable on its own; the
//! only coupling is the linear flow expressed in `DownloadRequest::new` and
//! `download_one`.

pub mod batch;
pub mod command;
pub mod executor;
pub mod format;
pub mod source;

pub use batch::{run_batch, BatchReport};
pub use command::{build_invocation, Invocation};
pub use executor::{Downloader, ProcessDownloader};
pub use format::{allowed_formats, is_allowed, Format};
pub use source::{classify, is_recognized, Source};

use crate::core::config::Config;
use crate::core::error::AppError;

/// A validated download job. Immutable once constructed, discarded after the
/// spawned process completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub source: Source,
    pub format: Format,
    /// Optional destination subfolder under the configured output directory
    pub subfolder: Option<String>,
}

impl DownloadRequest {
    /// Classify the URL and validate the format against the source's allowed set.
    ///
    /// This is the only way to obtain a `DownloadRequest`, so everything past
    /// this point can rely on the source/format pairing being legal.
    pub fn new(url: &str, format: Format, subfolder: Option<String>) -> Result<Self, AppError> {
        let source = source::classify(url).ok_or_else(|| AppError::UnrecognizedSource(url.to_string()))?;

        if !format::is_allowed(source, format) {
            return Err(AppError::UnsupportedFormat { format, source });
        }

        Ok(Self {
            url: url.to_string(),
            source,
            format,
            subfolder,
        })
    }
}

/// Run a single download end to end.
pub async fn download_one<D>(request: &DownloadRequest, config: &Config, downloader: &D) -> Result<(), AppError>
where
    D: Downloader + ?Sized,
{
    let invocation = build_invocation(request, config);
    downloader.run(&invocation).await
}
