// src/cli.rs

//! Command-line handling.
//!
//! The `--lock` / `--unlock` options swallow every following token up to
//! the next `--lock` / `--unlock`, including tokens that look like flags
//! (`--lock ls -la`). That shape does not fit a declarative parser, so the
//! scan is done by hand here. `clap` is still used to render help and
//! version text and to parse `--log-level` values.

use std::iter::Peekable;
use std::path::Path;

use clap::{Arg, ArgAction, Command, ValueEnum};

use crate::errors::{Result, ScreenwatchError};
use crate::types::CommandInvocation;

pub const LOCK_FLAG: &str = "--lock";
pub const UNLOCK_FLAG: &str = "--unlock";
pub const LOG_LEVEL_FLAG: &str = "--log-level";

/// Fallback program name when argv[0] is unusable.
pub const DEFAULT_PROGRAM_NAME: &str = "screenwatch";

const ABOUT: &str = "\
Runs user-specified commands when the screen is locked or unlocked by
listening for the \"com.apple.screenIsLocked\" and \"com.apple.screenIsUnlocked\" events.
It uses `command -v` to find the program in the user's PATH (or the explicit path given),
and then runs it with `command`, which can run shell builtins also.";

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub lock: Option<CommandInvocation>,
    pub unlock: Option<CommandInvocation>,
    pub log_level: Option<LogLevel>,
}

/// What `main` should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(CliArgs),
    Help,
    Version,
}

/// Scan the command-line tokens (without the program name).
///
/// Help and version markers short-circuit the scan. A repeated `--lock` or
/// `--unlock` replaces the earlier value.
pub fn parse_args<I, S>(tokens: I) -> Result<CliAction>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = tokens.into_iter().map(Into::into).peekable();
    let mut args = CliArgs::default();

    while let Some(token) = tokens.next() {
        match token.as_str() {
            LOCK_FLAG => args.lock = Some(collect_command(&mut tokens)),
            UNLOCK_FLAG => args.unlock = Some(collect_command(&mut tokens)),
            "--help" | "help" => return Ok(CliAction::Help),
            "--version" | "-V" | "version" => return Ok(CliAction::Version),
            LOG_LEVEL_FLAG => {
                let value = tokens
                    .next()
                    .ok_or_else(|| ScreenwatchError::MissingValue(LOG_LEVEL_FLAG.to_string()))?;
                args.log_level = Some(parse_log_level(&value)?);
            }
            _ => return Err(ScreenwatchError::UnknownOption(token)),
        }
    }

    Ok(CliAction::Run(args))
}

fn is_command_marker(token: &str) -> bool {
    token == LOCK_FLAG || token == UNLOCK_FLAG
}

fn collect_command<I>(tokens: &mut Peekable<I>) -> CommandInvocation
where
    I: Iterator<Item = String>,
{
    let mut argv = Vec::new();
    while let Some(token) = tokens.next_if(|t| !is_command_marker(t)) {
        argv.push(token);
    }
    CommandInvocation::new(argv)
}

pub fn parse_log_level(value: &str) -> Result<LogLevel> {
    LogLevel::from_str(value.trim(), true)
        .map_err(|_| ScreenwatchError::InvalidLogLevel(value.to_string()))
}

/// Basename of argv[0], as shown in help and version text.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// `clap` description of the CLI, used only for rendering.
pub fn command(name: &str) -> Command {
    Command::new(name.to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .about(ABOUT)
        .override_usage(format!(
            "{name} [OPTIONS] --lock <lock-command> [lock-command-arguments] \
             --unlock <unlock-command> [unlock-command-arguments]"
        ))
        .help_template("{name} {version}\n\n{about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("lock")
                .long("lock")
                .value_name("command")
                .num_args(1..)
                .help("Specify the command to run when the screen is locked"),
        )
        .arg(
            Arg::new("unlock")
                .long("unlock")
                .value_name("command")
                .num_args(1..)
                .help("Specify the command to run when the screen is unlocked"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(clap::builder::EnumValueParser::<LogLevel>::new())
                .help("Logging level (overrides SCREENWATCH_LOG)"),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .action(ArgAction::Version)
                .help("Display the version information and exit (also: version)"),
        )
        .arg(
            Arg::new("help")
                .long("help")
                .action(ArgAction::Help)
                .help("Display this help and exit (also: help)"),
        )
        .after_help(format!(
            "At least one of --lock or --unlock must be specified. \
             If either is omitted, no action will be taken for that event.\n\n\
             A single quoted command is run as shell text; several tokens are \
             passed to the command verbatim.\n\n\
             Examples:\n  \
             {name} --lock \"/path/to/lock-script.sh\" --unlock \"/path/to/unlock-script.sh\"\n  \
             {name} --lock \"echo 'Screen locked' >> /tmp/screen-events.log\" \
             --unlock \"echo 'Screen unlocked' >> /tmp/screen-events.log\"\n  \
             {name} --log-level debug --lock say locked --unlock say unlocked"
        ))
}

pub fn help_text(name: &str) -> String {
    command(name).render_help().to_string()
}

pub fn version_text(name: &str) -> String {
    command(name).render_version().trim_end().to_string()
}

pub fn print_help(name: &str) {
    eprintln!("{}", help_text(name).trim_end());
}

pub fn print_version(name: &str) {
    eprintln!("{}", version_text(name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(tokens: &[&str]) -> CliArgs {
        match parse_args(tokens.iter().copied()) {
            Ok(CliAction::Run(args)) => args,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    fn inv(tokens: &[&str]) -> CommandInvocation {
        CommandInvocation::new(tokens.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn collects_both_commands_with_hyphenated_args() {
        let args = run_args(&["--lock", "ls", "-la", "/tmp", "--unlock", "say", "--rate", "200"]);
        assert_eq!(args.lock, Some(inv(&["ls", "-la", "/tmp"])));
        assert_eq!(args.unlock, Some(inv(&["say", "--rate", "200"])));
    }

    #[test]
    fn markers_inside_a_command_run_are_plain_tokens() {
        let args = run_args(&["--lock", "printf", "--help", "version", "-V"]);
        assert_eq!(args.lock, Some(inv(&["printf", "--help", "version", "-V"])));
        assert_eq!(args.unlock, None);
    }

    #[test]
    fn marker_without_tokens_gives_empty_invocation() {
        let args = run_args(&["--lock", "--unlock", "true"]);
        assert_eq!(args.lock, Some(inv(&[])));
        assert_eq!(args.unlock, Some(inv(&["true"])));
    }

    #[test]
    fn later_marker_wins() {
        let args = run_args(&["--lock", "first", "--unlock", "u", "--lock", "second", "x"]);
        assert_eq!(args.lock, Some(inv(&["second", "x"])));
        assert_eq!(args.unlock, Some(inv(&["u"])));
    }

    #[test]
    fn empty_input_yields_no_bindings() {
        assert_eq!(run_args(&[]), CliArgs::default());
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse_args(["--help"]).unwrap(), CliAction::Help);
        assert_eq!(parse_args(["help", "--bogus"]).unwrap(), CliAction::Help);
        assert_eq!(parse_args(["-V"]).unwrap(), CliAction::Version);
        assert_eq!(parse_args(["version"]).unwrap(), CliAction::Version);
        assert_eq!(
            parse_args(["--unlock", "true", "--version"]).unwrap(),
            CliAction::Run(CliArgs {
                unlock: Some(inv(&["true", "--version"])),
                ..CliArgs::default()
            })
        );
    }

    #[test]
    fn unknown_leading_token_is_rejected() {
        match parse_args(["--unknown", "--lock", "true"]) {
            Err(ScreenwatchError::UnknownOption(token)) => assert_eq!(token, "--unknown"),
            other => panic!("expected UnknownOption, got {other:?}"),
        }
        // -h is not a help alias.
        assert!(matches!(
            parse_args(["-h"]),
            Err(ScreenwatchError::UnknownOption(_))
        ));
    }

    #[test]
    fn log_level_is_parsed_between_groups() {
        let args = run_args(&["--log-level", "DEBUG", "--lock", "true"]);
        assert_eq!(args.log_level, Some(LogLevel::Debug));

        assert!(matches!(
            parse_args(["--log-level"]),
            Err(ScreenwatchError::MissingValue(_))
        ));
        assert!(matches!(
            parse_args(["--log-level", "loud"]),
            Err(ScreenwatchError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn help_mentions_program_name_and_usage() {
        let help = help_text("screenwatch");
        assert!(help.starts_with("screenwatch "));
        assert!(help.contains("Usage: screenwatch [OPTIONS]"));
        assert!(help.contains("--lock <lock-command>"));
        assert!(help.contains("--unlock"));
        assert!(help.contains("com.apple.screenIsLocked"));
        assert!(help.contains("At least one of --lock or --unlock must be specified."));
    }

    #[test]
    fn version_text_is_name_and_version() {
        assert_eq!(
            version_text("screenwatch"),
            format!("screenwatch {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn clap_description_is_consistent() {
        command("screenwatch").debug_assert();
    }
}
