use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::graphql::types::Channel;
use crate::services::TakeoverSession;

#[derive(SimpleObject, Clone, Debug)]
pub struct TakeoverPayload {
    pub active: bool,
    pub channel: Option<Channel>,
    pub started_at: Option<DateTime<Utc>>,
}

impl TakeoverPayload {
    pub fn inactive() -> Self {
        Self {
            active: false,
            channel: None,
            started_at: None,
        }
    }
}

impl From<TakeoverSession> for TakeoverPayload {
    fn from(session: TakeoverSession) -> Self {
        Self {
            active: true,
            channel: Some(Channel::from(session.channel)),
            started_at: Some(session.started_at),
        }
    }
}

impl From<Option<TakeoverSession>> for TakeoverPayload {
    fn from(session: Option<TakeoverSession>) -> Self {
        session.map(Self::from).unwrap_or_else(Self::inactive)
    }
}
