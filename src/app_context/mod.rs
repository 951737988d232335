use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Settings;
use crate::services::{
    AlertService, ChannelService, DeviceAnnotator, DeviceService, Launcher, ModelAllowList,
    PassthroughTakeoverController, ProcessLauncher, TakeoverController, TakeoverCoordinator,
};

mod channel_operations;
mod configuration_operations;
mod connection_operations;
mod device_operations;
mod takeover_operations;

pub use connection_operations::ConnectReport;

/// Shared application context handed to the GraphQL layer.
///
/// Holds the record stores and the external collaborators (annotator,
/// launcher, takeover controller) behind trait objects so they can be swapped.
#[derive(Clone)]
pub struct AppContext {
    settings: Arc<Settings>,
    device_service: Arc<DeviceService>,
    channel_service: Arc<ChannelService>,
    alert_service: Arc<AlertService>,
    annotator: Arc<dyn DeviceAnnotator>,
    launcher: Arc<dyn Launcher>,
    takeover: Arc<TakeoverCoordinator>,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, settings: Settings) -> Self {
        let annotator = Arc::new(ModelAllowList::new(&settings.supported_models));
        let launcher = Arc::new(ProcessLauncher::new(&settings.launch_command));
        let controller = Arc::new(PassthroughTakeoverController);
        Self::with_collaborators(db, settings, annotator, launcher, controller)
    }

    pub fn with_collaborators(
        db: DatabaseConnection,
        settings: Settings,
        annotator: Arc<dyn DeviceAnnotator>,
        launcher: Arc<dyn Launcher>,
        controller: Arc<dyn TakeoverController>,
    ) -> Self {
        Self {
            device_service: Arc::new(DeviceService::new(db.clone())),
            channel_service: Arc::new(ChannelService::new(db.clone())),
            alert_service: Arc::new(AlertService::new(db)),
            takeover: Arc::new(TakeoverCoordinator::new(controller)),
            settings: Arc::new(settings),
            annotator,
            launcher,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn channel_service(&self) -> &Arc<ChannelService> {
        &self.channel_service
    }

    pub fn alert_service(&self) -> &Arc<AlertService> {
        &self.alert_service
    }
}
