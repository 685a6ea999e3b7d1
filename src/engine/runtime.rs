// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::exec::{ExecOutcome, ExecutorBackend};

use super::core::CoreRuntime;
use super::{CoreCommand, RuntimeEvent};

/// Feeds `RuntimeEvent`s into the `CoreRuntime` and hands the resulting
/// commands to an `ExecutorBackend`.
///
/// Events are handled strictly one at a time: the next event is not
/// received until the previous dispatch has finished, so lock and unlock
/// commands never overlap.
pub struct Runtime<E: ExecutorBackend> {
    core: CoreRuntime,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    executor: E,
}

impl<E: ExecutorBackend> fmt::Debug for Runtime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend> Runtime<E> {
    pub fn new(core: CoreRuntime, event_rx: mpsc::Receiver<RuntimeEvent>, executor: E) -> Self {
        Self {
            core,
            event_rx,
            executor,
        }
    }

    /// Main event loop. Returns once every sender has been dropped.
    pub async fn run(mut self) {
        info!("dispatcher started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await;
            }
        }
    }

    async fn execute_command(&mut self, command: CoreCommand) {
        match command {
            CoreCommand::Execute { event, invocation } => {
                let outcome = self.executor.execute(invocation).await;
                if outcome.succeeded() || matches!(outcome, ExecOutcome::NoCommand) {
                    debug!(%event, ?outcome, "dispatch finished");
                } else {
                    info!(%event, ?outcome, "dispatch finished without success");
                }
            }
        }
    }
}
