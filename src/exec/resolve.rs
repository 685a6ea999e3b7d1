// src/exec/resolve.rs

//! PATH-aware command resolution via `command -v`.

use std::process::Stdio;

use anyhow::{Context, Result};
use tracing::warn;

use super::launcher::Launcher;

/// Resolve `name` the way the shell would.
///
/// Returns the trimmed stdout of `command -v <name>`. Resolution fails
/// (`None`) only when the lookup exits non-zero *and* prints nothing, or
/// when the lookup itself cannot be run. The lookup's stderr is forwarded.
///
/// Nothing is cached, so PATH changes made after startup are honoured.
pub async fn resolve_command_path(launcher: &Launcher, name: &str) -> Option<String> {
    match lookup(launcher, name).await {
        Ok(path) => path,
        Err(err) => {
            warn!(command = %name, "command lookup failed to run: {err:#}");
            None
        }
    }
}

async fn lookup(launcher: &Launcher, name: &str) -> Result<Option<String>> {
    let output = launcher
        .lookup_command(name)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await
        .with_context(|| format!("running `command -v {name}` via {}", launcher.shell().display()))?;

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();

    if !output.status.success() && path.is_empty() {
        return Ok(None);
    }

    Ok(Some(path))
}
