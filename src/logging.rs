// src/logging.rs

//! Logging setup for `screenwatch` using `tracing` + `tracing-subscriber`.
//!
//! The level is resolved by [`Settings::log_level`]: `--log-level`, then
//! `SCREENWATCH_LOG`, then `info`.
//!
//! Logs go to STDERR. Stdout belongs to the commands being run.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Initialise the global logging subscriber. Call once at startup.
pub fn init_logging(level: LogLevel) -> Result<()> {
    fmt()
        .with_max_level(tracing_level(level))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

pub fn tracing_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}
