use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

/// Opens the control app for a device.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Starts the app and returns without waiting for it to exit.
    ///
    /// `connectAll` awaits each launch in turn, so an implementation that
    /// blocks until the app closes stalls every later device.
    async fn launch_app(&self, address: &str) -> Result<()>;
}

/// Spawns a local program with the device address as its last argument.
///
/// The child is not awaited; it keeps running after the call returns.
#[derive(Clone, Debug)]
pub struct ProcessLauncher {
    program: String,
    args: Vec<String>,
}

impl ProcessLauncher {
    /// `command` is split on whitespace into the program and its leading arguments.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        Self {
            program,
            args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch_app(&self, address: &str) -> Result<()> {
        if self.program.is_empty() {
            anyhow::bail!("No launch command configured");
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(address)
            .spawn()
            .with_context(|| format!("Failed to spawn '{}' for {}", self.program, address))?;

        info!(
            "Launched '{}' for {} (pid {:?})",
            self.program,
            address,
            child.id()
        );
        Ok(())
    }
}
