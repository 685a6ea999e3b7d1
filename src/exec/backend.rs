// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The runtime talks to an `ExecutorBackend` rather than spawning processes
//! itself, so tests can swap in a fake that only records invocations.

use std::future::Future;
use std::pin::Pin;

use crate::types::CommandInvocation;

use super::command::{execute, ExecOutcome};
use super::launcher::Launcher;

/// Trait abstracting how a bound command is executed.
pub trait ExecutorBackend: Send {
    /// Run `invocation` to completion.
    ///
    /// The runtime awaits the returned future before handling the next
    /// event, so implementations decide how long a dispatch blocks.
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = ExecOutcome> + Send + '_>>;
}

/// Production backend: resolves and runs commands through a [`Launcher`].
#[derive(Debug, Clone)]
pub struct RealExecutorBackend {
    launcher: Launcher,
}

impl RealExecutorBackend {
    pub fn new(launcher: Launcher) -> Self {
        Self { launcher }
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn execute(
        &mut self,
        invocation: CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = ExecOutcome> + Send + '_>> {
        Box::pin(async move { execute(&self.launcher, &invocation).await })
    }
}
