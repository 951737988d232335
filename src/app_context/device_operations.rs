use tracing::error;

use super::AppContext;
use crate::errors::{CoreResult, DeleteOutcome};
use crate::services::{AnnotatedDevice, DeviceChanges, NewDevice};

impl AppContext {
    // ----- Device helpers --------------------------------------------------
    pub async fn list_devices(&self) -> CoreResult<Vec<AnnotatedDevice>> {
        let devices = self.device_service.find_all().await?;
        Ok(self.annotator.annotate_all(devices))
    }

    pub async fn get_device(&self, id: i32) -> CoreResult<Option<AnnotatedDevice>> {
        let device = self.device_service.find(id).await?;
        Ok(device.map(|d| self.annotator.annotate(d)))
    }

    pub async fn create_device(&self, input: NewDevice) -> CoreResult<AnnotatedDevice> {
        let device = self.device_service.create(input).await?;
        Ok(self.annotator.annotate(device))
    }

    pub async fn update_device(
        &self,
        id: i32,
        changes: DeviceChanges,
    ) -> CoreResult<AnnotatedDevice> {
        let device = self.device_service.update(id, changes).await?;
        Ok(self.annotator.annotate(device))
    }

    pub async fn delete_device(&self, id: i32) -> DeleteOutcome<AnnotatedDevice> {
        let outcome = self.device_service.delete(id).await;
        if let DeleteOutcome::Failed(err) = &outcome {
            error!("Failed to delete device {}: {}", id, err);
        }
        outcome.map(|d| self.annotator.annotate(d))
    }
}
