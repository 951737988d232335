use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::database::entities::channels;
use crate::errors::{CoreError, CoreResult, DeleteOutcome};

#[derive(Clone, Debug)]
pub struct NewChannel {
    pub name: String,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

/// Partial update; `description: Some(None)` clears the stored description.
#[derive(Clone, Debug, Default)]
pub struct ChannelChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub enabled: Option<bool>,
}

#[derive(Clone)]
pub struct ChannelService {
    db: DatabaseConnection,
}

impl ChannelService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> CoreResult<Vec<channels::Model>> {
        let items = channels::Entity::find()
            .order_by_asc(channels::Column::Id)
            .all(&self.db)
            .await?;
        Ok(items)
    }

    pub async fn find(&self, id: i32) -> CoreResult<Option<channels::Model>> {
        Ok(channels::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, input: NewChannel) -> CoreResult<channels::Model> {
        let now = Utc::now();
        let active = channels::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            enabled: Set(input.enabled.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, changes: ChannelChanges) -> CoreResult<channels::Model> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| CoreError::not_found("channel", id))?;

        let mut active: channels::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(enabled) = changes.enabled {
            active.enabled = Set(enabled);
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> DeleteOutcome<channels::Model> {
        let existing = match self.find(id).await {
            Ok(Some(model)) => model,
            Ok(None) => return DeleteOutcome::NotFound,
            Err(err) => return DeleteOutcome::Failed(err),
        };

        match channels::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(result) if result.rows_affected == 0 => DeleteOutcome::NotFound,
            Ok(_) => DeleteOutcome::Deleted(existing),
            Err(err) => DeleteOutcome::Failed(err.into()),
        }
    }
}
