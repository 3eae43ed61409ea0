//! Persistent configuration and environment overrides.
//!
//! The on-disk record is a JSON object with PascalCase keys (`OutputDir`,
//! `SourcesFile`, ...) so existing config files keep working. A reload is a
//! wholesale replacement: `Config::load` returns a fresh value, nothing is
//! merged in place.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::core::error::AppError;

/// Cached youtube-dl binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "youtube-dl"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "youtube-dl".to_string()));

/// Cached spotdl binary path
/// Read once at startup from SPOTDL_BIN environment variable or defaults to "spotdl"
pub static SPOTDL_BIN: Lazy<String> = Lazy::new(|| env::var("SPOTDL_BIN").unwrap_or_else(|_| "spotdl".to_string()));

/// Download configuration
pub mod download {
    use super::Duration;

    /// Timeout for external downloader processes (in seconds)
    /// Generous because playlist downloads routinely run for many minutes
    pub const PROCESS_TIMEOUT_SECS: u64 = 3600;

    /// Downloader process timeout duration
    pub fn process_timeout() -> Duration {
        Duration::from_secs(PROCESS_TIMEOUT_SECS)
    }
}

/// User-facing settings persisted in `config.json`.
///
/// `DownloadThreads`/`SearchThreads` are never acted on locally — they are
/// forwarded verbatim to spotdl, which manages its own concurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// Directory downloads are written to (working directory of the child process)
    pub output_dir: String,
    /// Path to the batch sources file, one `<url> <format> [<folder...>]` per line
    pub sources_file: String,
    /// Forward custom thread counts to spotdl
    pub use_custom_threads: bool,
    /// spotdl download thread count (only used when `use_custom_threads`)
    pub download_threads: u32,
    /// spotdl search thread count (only used when `use_custom_threads`)
    pub search_threads: u32,
    /// Ask youtube-dl to write thumbnails as separate image files
    pub download_thumbnails: bool,
    /// Ask youtube-dl to embed thumbnails into the media file
    pub attach_thumbnails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "./".to_string(),
            sources_file: String::new(),
            use_custom_threads: false,
            download_threads: 0,
            search_threads: 0,
            download_thumbnails: false,
            attach_thumbnails: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Missing file and malformed JSON both surface as `ConfigInvalid` so the
    /// caller can decide whether to bail or fall back to `Config::default()`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::ConfigInvalid(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::ConfigInvalid(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Write the configuration to a JSON file, pretty-printed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::ConfigInvalid(format!("cannot serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
