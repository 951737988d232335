use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::database::entities::alerts::{self, AlertSeverity};
use crate::errors::{CoreError, CoreResult, DeleteOutcome};

#[derive(Clone, Debug)]
pub struct NewAlert {
    pub title: String,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
}

#[derive(Clone, Debug, Default)]
pub struct AlertChanges {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub acknowledged: Option<bool>,
}

#[derive(Clone)]
pub struct AlertService {
    db: DatabaseConnection,
}

impl AlertService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest alerts first
    pub async fn find_all(&self) -> CoreResult<Vec<alerts::Model>> {
        let items = alerts::Entity::find()
            .order_by_desc(alerts::Column::Id)
            .all(&self.db)
            .await?;
        Ok(items)
    }

    pub async fn find(&self, id: i32) -> CoreResult<Option<alerts::Model>> {
        Ok(alerts::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, input: NewAlert) -> CoreResult<alerts::Model> {
        let now = Utc::now();
        let severity = input.severity.unwrap_or(AlertSeverity::Info);
        let active = alerts::ActiveModel {
            title: Set(input.title),
            message: Set(input.message.unwrap_or_default()),
            severity: Set(severity.as_str().to_string()),
            acknowledged: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(active.insert(&self.db).await?)
    }

    pub async fn update(&self, id: i32, changes: AlertChanges) -> CoreResult<alerts::Model> {
        let existing = self
            .find(id)
            .await?
            .ok_or_else(|| CoreError::not_found("alert", id))?;

        let mut active: alerts::ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(message) = changes.message {
            active.message = Set(message);
        }
        if let Some(severity) = changes.severity {
            active.severity = Set(severity.as_str().to_string());
        }
        if let Some(acknowledged) = changes.acknowledged {
            active.acknowledged = Set(acknowledged);
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> DeleteOutcome<alerts::Model> {
        let existing = match self.find(id).await {
            Ok(Some(model)) => model,
            Ok(None) => return DeleteOutcome::NotFound,
            Err(err) => return DeleteOutcome::Failed(err),
        };

        match alerts::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(result) if result.rows_affected == 0 => DeleteOutcome::NotFound,
            Ok(_) => DeleteOutcome::Deleted(existing),
            Err(err) => DeleteOutcome::Failed(err.into()),
        }
    }
}
