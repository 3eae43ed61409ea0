use thiserror::Error;

use crate::download::format::Format;
use crate::download::source::Source;

/// Centralized error types for the application
///
/// Every failure mode gets its own variant so callers (CLI, batch runner,
/// tests) can tell them apart instead of collapsing everything to a boolean.
/// Uses `thiserror` for automatic error conversion and display formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// URL does not match any known platform prefix
    #[error("URL source not recognized: {0}")]
    UnrecognizedSource(String),

    /// Format token that names no known container/codec
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Format exists but is not allowed for the classified source
    #[error("Format {format} is not supported for {source} downloads")]
    UnsupportedFormat { format: Format, source: Source },

    /// The downloader binary could not be started (missing from PATH, permissions)
    #[error("Failed to spawn {program}: {source}")]
    ProcessSpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The downloader ran but reported failure through its exit status
    #[error("{program} exited with code {code:?}")]
    ProcessExitedNonZero { program: String, code: Option<i32> },

    /// The downloader did not finish within the configured timeout
    #[error("{program} timed out after {secs}s")]
    ProcessTimedOut { program: String, secs: u64 },

    /// Configuration file missing, unreadable, or not valid JSON
    #[error("Configuration error: {0}")]
    ConfigInvalid(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
