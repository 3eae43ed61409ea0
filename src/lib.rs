//! Medley — console front-end for external media downloaders.
//!
//! Classifies a media URL (YouTube, SoundCloud, Spotify), validates the
//! requested format against the platform, builds an argument vector for the
//! matching external binary (`youtube-dl` or `spotdl`), and runs it. All
//! fetching, parsing, and transcoding happens in those binaries — this crate
//! is the decision-making around them.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `download`: URL classifier, format sets, command builder, executor, batch runner

pub mod core;
pub mod download;

// Re-export commonly used types for convenience
pub use crate::core::{AppError, AppResult, Config};
pub use crate::download::{
    allowed_formats, build_invocation, classify, download_one, is_allowed, is_recognized, run_batch, BatchReport,
    DownloadRequest, Downloader, Format, Invocation, ProcessDownloader, Source,
};
