//! Logging initialization
//!
//! Console logger via simplelog. The downloader's own output goes straight to
//! the inherited stdout/stderr; our log lines only cover the pipeline around it.

use anyhow::Result;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Initialize the terminal logger.
///
/// `verbose` drops the filter from Info to Debug.
pub fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
