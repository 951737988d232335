use tracing::{debug, info, warn};

use super::AppContext;
use crate::errors::CoreResult;

/// Tally of a bulk launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectReport {
    pub launched: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl AppContext {
    /// Launches the app for every supported device.
    ///
    /// Launcher failures are logged and counted; they do not abort the run.
    pub async fn connect_all_devices(&self) -> CoreResult<ConnectReport> {
        let devices = self.list_devices().await?;
        let mut report = ConnectReport::default();

        for annotated in devices {
            if !annotated.supported {
                debug!(
                    "Skipping unsupported device {} ({})",
                    annotated.device.id, annotated.device.model
                );
                report.skipped += 1;
                continue;
            }

            match self.launcher.launch_app(&annotated.device.address).await {
                Ok(()) => report.launched += 1,
                Err(err) => {
                    warn!(
                        "Failed to launch app for device {} at {}: {}",
                        annotated.device.id, annotated.device.address, err
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            "Connect all: {} launched, {} failed, {} skipped",
            report.launched, report.failed, report.skipped
        );
        Ok(report)
    }

    /// Returns `false` when the device does not exist; the launch result does not affect the return value.
    pub async fn connect_device(&self, id: i32) -> CoreResult<bool> {
        let Some(device) = self.device_service.find(id).await? else {
            debug!("Connect requested for unknown device {}", id);
            return Ok(false);
        };

        if let Err(err) = self.launcher.launch_app(&device.address).await {
            warn!(
                "Failed to launch app for device {} at {}: {}",
                device.id, device.address, err
            );
        }
        Ok(true)
    }
}
