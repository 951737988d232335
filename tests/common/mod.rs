#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use lumen::app_context::AppContext;
use lumen::config::Settings;
use lumen::database::entities::channels;
use lumen::database::test_utils::setup_test_db;
use lumen::services::{Launcher, ModelAllowList, TakeoverController};

/// Records every address it is asked to launch; fails for addresses in `failing`.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<String>>,
    pub failing: Vec<String>,
}

impl RecordingLauncher {
    pub fn failing_for(addresses: &[&str]) -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            failing: addresses.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Launcher for RecordingLauncher {
    async fn launch_app(&self, address: &str) -> Result<()> {
        self.launched.lock().unwrap().push(address.to_string());
        if self.failing.iter().any(|a| a == address) {
            return Err(anyhow!("launcher refused {}", address));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingController {
    pub started: Mutex<Vec<i32>>,
    pub stops: Mutex<usize>,
}

impl RecordingController {
    pub fn started(&self) -> Vec<i32> {
        self.started.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        *self.stops.lock().unwrap()
    }
}

#[async_trait]
impl TakeoverController for RecordingController {
    async fn start(&self, channel: channels::Model) -> Result<channels::Model> {
        self.started.lock().unwrap().push(channel.id);
        Ok(channel)
    }

    async fn stop(&self) -> Result<()> {
        *self.stops.lock().unwrap() += 1;
        Ok(())
    }
}

pub struct TestApp {
    pub app: AppContext,
    /// Handle on the same in-memory database, for tests that break the store
    pub db: DatabaseConnection,
    pub launcher: Arc<RecordingLauncher>,
    pub controller: Arc<RecordingController>,
}

pub async fn setup_app_with(settings: Settings, launcher: RecordingLauncher) -> TestApp {
    let db = setup_test_db().await.expect("Failed to set up test database");
    let launcher = Arc::new(launcher);
    let controller = Arc::new(RecordingController::default());
    let annotator = Arc::new(ModelAllowList::new(&settings.supported_models));

    let app = AppContext::with_collaborators(
        db.clone(),
        settings,
        annotator,
        launcher.clone(),
        controller.clone(),
    );

    TestApp {
        app,
        db,
        launcher,
        controller,
    }
}

pub async fn setup_app() -> TestApp {
    setup_app_with(Settings::default(), RecordingLauncher::default()).await
}
