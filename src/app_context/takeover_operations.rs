use super::AppContext;
use crate::errors::CoreResult;
use crate::services::TakeoverSession;

impl AppContext {
    /// `None` when the channel does not exist; the controller is not touched in that case.
    pub async fn start_takeover(&self, channel_id: i32) -> CoreResult<Option<TakeoverSession>> {
        let Some(channel) = self.channel_service.find(channel_id).await? else {
            return Ok(None);
        };
        let session = self.takeover.start(channel).await?;
        Ok(Some(session))
    }

    pub async fn end_takeover(&self) -> Option<TakeoverSession> {
        self.takeover.stop().await
    }

    pub async fn takeover_status(&self) -> Option<TakeoverSession> {
        self.takeover.current().await
    }
}
