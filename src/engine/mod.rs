// src/engine/mod.rs

//! Dispatch engine.
//!
//! The pure core state machine lives in [`core`]; the async/IO shell that
//! drains the event channel and drives the executor is in [`runtime`].

use crate::types::{CommandInvocation, ScreenEvent};

/// Events flowing into the runtime from the notification source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A screen lock/unlock notification arrived.
    Screen(ScreenEvent),
}

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Run the invocation bound to `event`.
    Execute {
        event: ScreenEvent,
        invocation: CommandInvocation,
    },
}

/// Decision returned by the core after handling a single `RuntimeEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    /// Commands the IO shell should execute, in order.
    pub commands: Vec<CoreCommand>,
}

pub mod core;
pub mod runtime;

pub use self::core::CoreRuntime;
pub use self::runtime::Runtime;
