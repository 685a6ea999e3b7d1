// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod types;

use tokio::sync::mpsc;
use tracing::warn;

use crate::cli::CliArgs;
use crate::config::Settings;
use crate::engine::{CoreRuntime, Runtime, RuntimeEvent};
use crate::errors::{Result, ScreenwatchError};
use crate::exec::RealExecutorBackend;
use crate::types::Bindings;

/// Capacity of the notification → dispatcher channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Printed on Ctrl-C, right before exiting.
pub const FAREWELL_MESSAGE: &str = "received ctrl+c, exiting...";

/// Turn parsed arguments into event bindings.
///
/// At least one of `--lock` / `--unlock` must have been given.
pub fn bindings_from_args(args: &CliArgs) -> Result<Bindings> {
    let bindings = Bindings::new(args.lock.clone(), args.unlock.clone());
    if bindings.is_unbound() {
        return Err(ScreenwatchError::NoCommands);
    }
    Ok(bindings)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the dispatcher runtime, on a background Tokio runtime
/// - Ctrl-C handling
/// - the platform notification source, which takes over the calling
///   (main) thread
pub fn run(bindings: Bindings, settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("screenwatch-rt")
        .build()?;

    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(EVENT_CHANNEL_CAPACITY);

    let executor = RealExecutorBackend::new(settings.launcher());
    let runtime = Runtime::new(CoreRuntime::new(bindings), rt_rx, executor);

    rt.spawn(runtime.run());

    rt.spawn(exit_on_ctrl_c());

    platform::run_event_loop(rt_tx)
}

/// Exit immediately on Ctrl-C. A command that is still running is left
/// alone.
async fn exit_on_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl+C: {e}");
        return;
    }
    eprintln!("{FAREWELL_MESSAGE}");
    std::process::exit(0);
}
