use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::database::entities::channels;
use crate::errors::{CoreError, CoreResult};

/// Drives an exclusive control session on a channel.
#[async_trait]
pub trait TakeoverController: Send + Sync {
    /// Begins controlling `channel`, returning the channel as the controller sees it.
    async fn start(&self, channel: channels::Model) -> Result<channels::Model>;

    async fn stop(&self) -> Result<()>;
}

/// Controller that only records the transition in the log.
#[derive(Clone, Debug, Default)]
pub struct PassthroughTakeoverController;

#[async_trait]
impl TakeoverController for PassthroughTakeoverController {
    async fn start(&self, channel: channels::Model) -> Result<channels::Model> {
        info!("Takeover controller engaged on channel {}", channel.id);
        Ok(channel)
    }

    async fn stop(&self) -> Result<()> {
        info!("Takeover controller released");
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TakeoverSession {
    pub channel: channels::Model,
    pub started_at: DateTime<Utc>,
}

/// Owns the single takeover session.
///
/// Start and stop run under one lock, so the slot and the controller never
/// disagree about which channel is active.
pub struct TakeoverCoordinator {
    controller: Arc<dyn TakeoverController>,
    session: Mutex<Option<TakeoverSession>>,
}

impl TakeoverCoordinator {
    pub fn new(controller: Arc<dyn TakeoverController>) -> Self {
        Self {
            controller,
            session: Mutex::new(None),
        }
    }

    /// Replaces any running session with one on `channel`.
    pub async fn start(&self, channel: channels::Model) -> CoreResult<TakeoverSession> {
        let mut slot = self.session.lock().await;

        if let Some(previous) = slot.take() {
            info!(
                "Replacing takeover on channel {} with channel {}",
                previous.channel.id, channel.id
            );
            if let Err(err) = self.controller.stop().await {
                warn!("Takeover controller failed to stop previous session: {}", err);
            }
        }

        let channel_id = channel.id;
        let active = self
            .controller
            .start(channel)
            .await
            .map_err(|e| CoreError::unavailable("TakeoverController", e))?;

        let session = TakeoverSession {
            channel: active,
            started_at: Utc::now(),
        };
        *slot = Some(session.clone());
        info!("Takeover started on channel {}", channel_id);

        Ok(session)
    }

    /// Ends the session. The controller is told to stop even when nothing is running.
    pub async fn stop(&self) -> Option<TakeoverSession> {
        let mut slot = self.session.lock().await;
        let previous = slot.take();

        if let Err(err) = self.controller.stop().await {
            warn!("Takeover controller failed to stop: {}", err);
        }
        match &previous {
            Some(session) => info!("Takeover ended on channel {}", session.channel.id),
            None => info!("Takeover stop requested with no active session"),
        }

        previous
    }

    pub async fn current(&self) -> Option<TakeoverSession> {
        self.session.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingController {
        events: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl TakeoverController for RecordingController {
        async fn start(&self, channel: channels::Model) -> Result<channels::Model> {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", channel.id));
            Ok(channel)
        }

        async fn stop(&self) -> Result<()> {
            self.events.lock().unwrap().push("stop".to_string());
            Ok(())
        }
    }

    fn channel(id: i32) -> channels::Model {
        channels::Model {
            id,
            name: format!("channel-{}", id),
            description: None,
            enabled: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_second_start_stops_the_first_session() {
        let controller = Arc::new(RecordingController::default());
        let coordinator = TakeoverCoordinator::new(controller.clone());

        coordinator.start(channel(1)).await.unwrap();
        coordinator.start(channel(2)).await.unwrap();

        assert_eq!(
            *controller.events.lock().unwrap(),
            vec!["start:1", "stop", "start:2"]
        );
        assert_eq!(coordinator.current().await.unwrap().channel.id, 2);
    }

    #[tokio::test]
    async fn test_stop_without_session_still_reaches_controller() {
        let controller = Arc::new(RecordingController::default());
        let coordinator = TakeoverCoordinator::new(controller.clone());

        assert!(coordinator.stop().await.is_none());
        assert_eq!(*controller.events.lock().unwrap(), vec!["stop"]);
    }

    #[tokio::test]
    async fn test_concurrent_starts_leave_exactly_one_session() {
        let controller = Arc::new(RecordingController::default());
        let coordinator = Arc::new(TakeoverCoordinator::new(controller.clone()));

        let handles: Vec<_> = (1..=8)
            .map(|id| {
                let coordinator = coordinator.clone();
                tokio::spawn(async move { coordinator.start(channel(id)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let events = controller.events.lock().unwrap().clone();
        let starts = events.iter().filter(|e| e.starts_with("start")).count();
        let stops = events.iter().filter(|e| *e == "stop").count();
        assert_eq!(starts, 8);
        assert_eq!(stops, 7);

        let active = coordinator.current().await.unwrap();
        assert_eq!(events.last().unwrap(), &format!("start:{}", active.channel.id));
    }
}
