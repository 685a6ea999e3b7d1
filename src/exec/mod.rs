// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`launcher`] builds the shell commands used for PATH lookup and for
//!   running an invocation.
//! - [`resolve`] performs the `command -v` lookup.
//! - [`command`] runs one invocation to completion with inherited stdio.
//! - [`backend`] provides the `ExecutorBackend` trait the runtime talks to,
//!   and `RealExecutorBackend`, which tests can replace with a fake.

pub mod backend;
pub mod command;
pub mod launcher;
pub mod resolve;

pub use backend::{ExecutorBackend, RealExecutorBackend};
pub use command::{execute, ExecOutcome};
pub use launcher::{LaunchMode, Launcher};
pub use resolve::resolve_command_path;
