// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenwatchError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("No commands specified. Please provide at least one command.")]
    NoCommands,

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid log level: {0} (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("Screen lock notifications are not supported on {0}")]
    UnsupportedPlatform(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScreenwatchError {
    /// Errors caused by bad command-line input; these get the help text.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            ScreenwatchError::UnknownOption(_)
                | ScreenwatchError::NoCommands
                | ScreenwatchError::MissingValue(_)
                | ScreenwatchError::InvalidLogLevel(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScreenwatchError>;
