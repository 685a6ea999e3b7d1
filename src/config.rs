// src/config.rs

//! Runtime settings.
//!
//! `screenwatch` reads no config files; everything comes from the command
//! line and a couple of environment variables:
//!
//! - `SCREENWATCH_SHELL`: shell that hosts `command` / `command -v`
//!   (default `/bin/sh`).
//! - `SCREENWATCH_LOG`: log level when `--log-level` is not given.

use std::path::PathBuf;

use crate::cli::{parse_log_level, LogLevel};
use crate::exec::Launcher;

pub const SHELL_ENV: &str = "SCREENWATCH_SHELL";
pub const LOG_ENV: &str = "SCREENWATCH_LOG";
pub const DEFAULT_SHELL: &str = "/bin/sh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub shell: PathBuf,
    /// Level requested through the environment, if it parsed.
    pub env_log_level: Option<LogLevel>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            env_log_level: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Blank values count as unset; an unparseable log level is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let shell = non_blank(SHELL_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL));
        let env_log_level = non_blank(LOG_ENV).and_then(|v| parse_log_level(&v).ok());

        Self {
            shell,
            env_log_level,
        }
    }

    /// Effective log level: CLI flag, then environment, then `info`.
    pub fn log_level(&self, cli_level: Option<LogLevel>) -> LogLevel {
        cli_level.or(self.env_log_level).unwrap_or(LogLevel::Info)
    }

    pub fn launcher(&self) -> Launcher {
        Launcher::new(self.shell.clone())
    }
}
