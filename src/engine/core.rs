// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! Maps each incoming [`RuntimeEvent`] to the commands the IO shell should
//! perform. No channels, no Tokio, no processes: the bindings are fixed at
//! construction and never change afterwards.

use tracing::{debug, info};

use crate::engine::{CoreCommand, CoreStep, RuntimeEvent};
use crate::types::{Bindings, ScreenEvent};

#[derive(Debug)]
pub struct CoreRuntime {
    bindings: Bindings,
}

impl CoreRuntime {
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Handle a single runtime event.
    pub fn step(&mut self, event: RuntimeEvent) -> CoreStep {
        match event {
            RuntimeEvent::Screen(screen_event) => self.handle_screen_event(screen_event),
        }
    }

    fn handle_screen_event(&self, event: ScreenEvent) -> CoreStep {
        info!("notification: {event}");

        let commands = match self.bindings.invocation_for(event) {
            Some(invocation) => vec![CoreCommand::Execute {
                event,
                invocation: invocation.clone(),
            }],
            None => {
                debug!(%event, "no command bound for event");
                Vec::new()
            }
        };

        CoreStep { commands }
    }
}
