// src/exec/launcher.rs

//! Shell-hosted launcher.
//!
//! Both operations go through the `command` builtin of a POSIX shell, the
//! same thing `/usr/bin/command` wraps on macOS:
//!
//! - lookup: `<shell> -c 'command -v "$1"' screenwatch <name>`
//! - run:    `<shell> -c 'command "$@"' screenwatch <name> <args...>`
//!
//! A single token that does not resolve as a command is run as shell text
//! instead: `<shell> -c <token> screenwatch`.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::types::CommandInvocation;

/// Value of `$0` inside the launcher shell; prefixes shell diagnostics.
pub const SCRIPT_NAME: &str = "screenwatch";

pub const LOOKUP_SCRIPT: &str = r#"command -v "$1""#;
pub const RUN_SCRIPT: &str = r#"command "$@""#;

/// How an invocation is handed to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// `command "$@"` with the argv passed through unchanged.
    Verbatim,
    /// The single token is the `-c` script.
    ShellText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    shell: PathBuf,
}

impl Launcher {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    /// Command printing the resolved path of `name` on stdout.
    pub fn lookup_command(&self, name: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(LOOKUP_SCRIPT).arg(SCRIPT_NAME).arg(name);
        cmd
    }

    /// Command running `invocation`. The invocation must not be empty;
    /// `ShellText` uses only its first token.
    pub fn run_command(&self, invocation: &CommandInvocation, mode: LaunchMode) -> Command {
        let mut cmd = Command::new(&self.shell);
        match (mode, invocation.program()) {
            (LaunchMode::ShellText, Some(script)) => {
                cmd.arg("-c").arg(script).arg(SCRIPT_NAME);
            }
            _ => {
                cmd.arg("-c")
                    .arg(RUN_SCRIPT)
                    .arg(SCRIPT_NAME)
                    .args(invocation.argv());
            }
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv_of(cmd: &Command) -> Vec<String> {
        let std_cmd = cmd.as_std();
        std::iter::once(std_cmd.get_program())
            .chain(std_cmd.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn lookup_passes_name_as_positional() {
        let launcher = Launcher::new("/bin/sh");
        assert_eq!(
            argv_of(&launcher.lookup_command("my tool")),
            ["/bin/sh", "-c", LOOKUP_SCRIPT, SCRIPT_NAME, "my tool"]
        );
    }

    #[test]
    fn multi_token_invocation_is_passed_verbatim() {
        let launcher = Launcher::new("/bin/sh");
        let inv = CommandInvocation::new(vec!["say".into(), "hello world".into(), "-v".into()]);
        assert_eq!(
            argv_of(&launcher.run_command(&inv, LaunchMode::Verbatim)),
            ["/bin/sh", "-c", RUN_SCRIPT, SCRIPT_NAME, "say", "hello world", "-v"]
        );
    }

    #[test]
    fn single_token_can_run_either_way() {
        let launcher = Launcher::new("/bin/bash");
        let inv = CommandInvocation::new(vec!["/opt/my scripts/lock.sh".into()]);
        assert_eq!(
            argv_of(&launcher.run_command(&inv, LaunchMode::ShellText)),
            ["/bin/bash", "-c", "/opt/my scripts/lock.sh", SCRIPT_NAME]
        );
        assert_eq!(
            argv_of(&launcher.run_command(&inv, LaunchMode::Verbatim)),
            ["/bin/bash", "-c", RUN_SCRIPT, SCRIPT_NAME, "/opt/my scripts/lock.sh"]
        );
    }
}
