use async_graphql::*;
use chrono::{DateTime, Utc};

use super::optional_change;
use crate::database::entities::channels;
use crate::services::{ChannelChanges, NewChannel};

#[derive(SimpleObject, Clone, Debug)]
pub struct Channel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<channels::Model> for Channel {
    fn from(model: channels::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            enabled: model.enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct ChannelInput {
    pub name: String,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

impl From<ChannelInput> for NewChannel {
    fn from(input: ChannelInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            enabled: input.enabled,
        }
    }
}

#[derive(InputObject, Default)]
pub struct ChannelChangesInput {
    pub name: Option<String>,
    /// An explicit `null` clears the description
    pub description: MaybeUndefined<String>,
    pub enabled: Option<bool>,
}

impl From<ChannelChangesInput> for ChannelChanges {
    fn from(input: ChannelChangesInput) -> Self {
        Self {
            name: input.name,
            description: optional_change(input.description),
            enabled: input.enabled,
        }
    }
}
