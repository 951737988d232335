use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::alerts::{self, AlertSeverity};
use crate::services::{AlertChanges, NewAlert};

#[derive(SimpleObject, Clone, Debug)]
pub struct Alert {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub acknowledged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<alerts::Model> for Alert {
    fn from(model: alerts::Model) -> Self {
        let severity = model.severity_level();
        Self {
            id: model.id,
            title: model.title,
            message: model.message,
            severity,
            acknowledged: model.acknowledged,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct AlertInput {
    pub title: String,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
}

impl From<AlertInput> for NewAlert {
    fn from(input: AlertInput) -> Self {
        Self {
            title: input.title,
            message: input.message,
            severity: input.severity,
        }
    }
}

#[derive(InputObject, Default)]
pub struct AlertChangesInput {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<AlertSeverity>,
    pub acknowledged: Option<bool>,
}

impl From<AlertChangesInput> for AlertChanges {
    fn from(input: AlertChangesInput) -> Self {
        Self {
            title: input.title,
            message: input.message,
            severity: input.severity,
            acknowledged: input.acknowledged,
        }
    }
}
