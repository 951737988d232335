use tracing::error;

use super::AppContext;
use crate::database::entities::{alerts, channels};
use crate::errors::DeleteOutcome;

impl AppContext {
    // ----- Channel and alert helpers ----------------------------------------
    pub async fn delete_channel(&self, id: i32) -> DeleteOutcome<channels::Model> {
        let outcome = self.channel_service.delete(id).await;
        if let DeleteOutcome::Failed(err) = &outcome {
            error!("Failed to delete channel {}: {}", id, err);
        }
        outcome
    }

    pub async fn delete_alert(&self, id: i32) -> DeleteOutcome<alerts::Model> {
        let outcome = self.alert_service.delete(id).await;
        if let DeleteOutcome::Failed(err) = &outcome {
            error!("Failed to delete alert {}: {}", id, err);
        }
        outcome
    }
}
