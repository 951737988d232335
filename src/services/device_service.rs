use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use crate::database::entities::devices;
use crate::errors::{CoreError, CoreResult, DeleteOutcome};

#[derive(Clone, Debug)]
pub struct NewDevice {
    pub name: String,
    pub address: String,
    pub model: String,
    pub firmware: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched and
/// `firmware: Some(None)` clears it.
#[derive(Clone, Debug, Default)]
pub struct DeviceChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub model: Option<String>,
    pub firmware: Option<Option<String>>,
}

/// Record store for devices
#[derive(Clone)]
pub struct DeviceService {
    db: DatabaseConnection,
}

impl DeviceService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> CoreResult<Vec<devices::Model>> {
        let items = devices::Entity::find()
            .order_by_asc(devices::Column::Id)
            .all(&self.db)
            .await?;
        Ok(items)
    }

    pub async fn find(&self, id: i32) -> CoreResult<Option<devices::Model>> {
        let item = devices::Entity::find_by_id(id).one(&self.db).await?;
        Ok(item)
    }

    pub async fn create(&self, input: NewDevice) -> CoreResult<devices::Model> {
        let now = Utc::now();
        let active = devices::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            model: Set(input.model),
            firmware: Set(input.firmware),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        debug!("Created device {} at {}", model.id, model.address);
        Ok(model)
    }

    pub async fn update(&self, id: i32, changes: DeviceChanges) -> CoreResult<devices::Model> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| CoreError::not_found("device", id))?;

        let mut active: devices::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(address) = changes.address {
            active.address = Set(address);
        }
        if let Some(model) = changes.model {
            active.model = Set(model);
        }
        if let Some(firmware) = changes.firmware {
            active.firmware = Set(firmware);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DeleteOutcome<devices::Model> {
        let existing = match self.find(id).await {
            Ok(Some(model)) => model,
            Ok(None) => return DeleteOutcome::NotFound,
            Err(err) => return DeleteOutcome::Failed(err),
        };

        match devices::Entity::delete_by_id(id).exec(&self.db).await {
            // Removed by someone else between the lookup and the delete
            Ok(result) if result.rows_affected == 0 => DeleteOutcome::NotFound,
            Ok(_) => DeleteOutcome::Deleted(existing),
            Err(err) => DeleteOutcome::Failed(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;

    fn strip(name: &str) -> NewDevice {
        NewDevice {
            name: name.to_string(),
            address: "10.0.0.12".to_string(),
            model: "lumen-strip".to_string(),
            firmware: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let service = DeviceService::new(setup_test_db().await.unwrap());

        let created = service.create(strip("Kitchen")).await.unwrap();
        let found = service.find(created.id).await.unwrap().unwrap();

        assert_eq!(found.name, "Kitchen");
        assert_eq!(found.address, "10.0.0.12");
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_name() {
        let service = DeviceService::new(setup_test_db().await.unwrap());
        let created = service.create(strip("")).await.unwrap();
        assert_eq!(created.name, "");
    }

    #[tokio::test]
    async fn test_update_only_touches_given_fields() {
        let service = DeviceService::new(setup_test_db().await.unwrap());
        let created = service.create(strip("Hall")).await.unwrap();

        let updated = service
            .update(
                created.id,
                DeviceChanges {
                    firmware: Some(Some("2.1.0".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Hall");
        assert_eq!(updated.firmware.as_deref(), Some("2.1.0"));
        assert!(updated.updated_at >= created.updated_at);

        let cleared = service
            .update(
                created.id,
                DeviceChanges {
                    firmware: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.firmware, None);
        assert_eq!(cleared.address, "10.0.0.12");
    }

    #[tokio::test]
    async fn test_update_missing_device() {
        let service = DeviceService::new(setup_test_db().await.unwrap());
        let err = service
            .update(99, DeviceChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No device found for id 99");
    }

    #[tokio::test]
    async fn test_delete_outcomes() {
        let service = DeviceService::new(setup_test_db().await.unwrap());
        let created = service.create(strip("Porch")).await.unwrap();

        let outcome = service.delete(created.id).await;
        assert_eq!(outcome.into_model().map(|m| m.id), Some(created.id));
        assert!(service.find(created.id).await.unwrap().is_none());

        assert!(matches!(
            service.delete(created.id).await,
            DeleteOutcome::NotFound
        ));
    }
}
