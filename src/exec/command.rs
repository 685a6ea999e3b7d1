// src/exec/command.rs

//! Run a single command invocation to completion.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use crate::types::CommandInvocation;

use super::launcher::{LaunchMode, Launcher};
use super::resolve::resolve_command_path;

/// What happened when an invocation was executed.
///
/// Never an error from the caller's point of view: failures are logged
/// here and the dispatcher carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The invocation was empty; nothing ran.
    NoCommand,
    /// The launcher ran and exited. `code` is `None` when killed by a signal.
    Exited {
        resolved: Option<String>,
        code: Option<i32>,
    },
    /// The launcher could not be spawned or waited on.
    SpawnFailed { resolved: Option<String> },
}

impl ExecOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, ExecOutcome::Exited { code: Some(0), .. })
    }
}

/// Resolve and run `invocation`, blocking (asynchronously) until it exits.
///
/// Resolution is advisory: a failed lookup is logged but the command is
/// still handed to the shell, which may know it as a builtin. A single
/// token that resolves as a whole (a path, even one with spaces) runs
/// verbatim; otherwise it is run as shell text. The child's stdout/stderr
/// are the parent's own.
pub async fn execute(launcher: &Launcher, invocation: &CommandInvocation) -> ExecOutcome {
    let Some(program) = invocation.program() else {
        info!("no command specified");
        return ExecOutcome::NoCommand;
    };

    let (mode, resolved) = plan_launch(launcher, invocation, program).await;
    match &resolved {
        Some(path) => debug!(command = %program, path = %path, "resolved command"),
        None => warn!(command = %program, "command not found in PATH; handing it to the shell anyway"),
    }

    info!(command = %invocation, ?mode, "starting command");

    match run_to_completion(launcher, invocation, mode).await {
        Ok(status) => {
            let code = status.code();
            info!(
                command = %program,
                exit_code = ?code,
                success = status.success(),
                "command exited"
            );
            ExecOutcome::Exited { resolved, code }
        }
        Err(err) => {
            error!("Failed to run {program}: {err:#}");
            debug!(error = ?err, "error details");
            ExecOutcome::SpawnFailed { resolved }
        }
    }
}

/// Pick the launch mode and the advisory resolution result.
async fn plan_launch(
    launcher: &Launcher,
    invocation: &CommandInvocation,
    program: &str,
) -> (LaunchMode, Option<String>) {
    let resolved = resolve_command_path(launcher, program).await;
    if resolved.is_some() || !invocation.is_single_token() {
        return (LaunchMode::Verbatim, resolved);
    }

    let resolved = match invocation.shell_text_command_word() {
        Some(word) => resolve_command_path(launcher, word).await,
        None => None,
    };
    (LaunchMode::ShellText, resolved)
}

async fn run_to_completion(
    launcher: &Launcher,
    invocation: &CommandInvocation,
    mode: LaunchMode,
) -> Result<ExitStatus> {
    let mut cmd = launcher.run_command(invocation, mode);
    cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning launcher {}", launcher.shell().display()))?;

    let status = child
        .wait()
        .await
        .context("waiting for command to exit")?;

    Ok(status)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn inv(tokens: &[&str]) -> CommandInvocation {
        CommandInvocation::new(tokens.iter().map(|s| s.to_string()).collect())
    }

    fn sh() -> Launcher {
        Launcher::new("/bin/sh")
    }

    #[tokio::test]
    async fn empty_invocation_is_a_no_op() {
        assert_eq!(execute(&sh(), &inv(&[])).await, ExecOutcome::NoCommand);
    }

    #[tokio::test]
    async fn exit_code_is_reported() {
        let outcome = execute(&sh(), &inv(&["sh", "-c", "exit 3"])).await;
        match outcome {
            ExecOutcome::Exited { resolved, code } => {
                assert_eq!(code, Some(3));
                assert!(resolved.is_some());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn shell_text_runs_through_the_shell() {
        let outcome = execute(&sh(), &inv(&["test 1 -eq 1 && exit 0 || exit 9"])).await;
        assert!(outcome.succeeded(), "unexpected outcome: {outcome:?}");
    }

    #[tokio::test]
    async fn leading_assignments_are_skipped_for_lookup() {
        let outcome = execute(&sh(), &inv(&["SCREENWATCH_X=1 sh -c 'exit 4'"])).await;
        match outcome {
            ExecOutcome::Exited { resolved, code } => {
                assert_eq!(code, Some(4));
                let path = resolved.expect("sh should resolve");
                assert!(path.ends_with("sh"), "unexpected path: {path}");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_command_still_runs_and_fails_softly() {
        let outcome = execute(&sh(), &inv(&["screenwatch-definitely-missing-cmd", "a"])).await;
        assert_eq!(
            outcome,
            ExecOutcome::Exited {
                resolved: None,
                code: Some(127)
            }
        );
    }

    #[tokio::test]
    async fn unusable_launcher_reports_spawn_failure() {
        let launcher = Launcher::new("/nonexistent/screenwatch-shell");
        let outcome = execute(&launcher, &inv(&["true"])).await;
        assert_eq!(outcome, ExecOutcome::SpawnFailed { resolved: None });
    }
}
