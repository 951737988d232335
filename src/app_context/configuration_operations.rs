use tracing::warn;

use super::AppContext;
use crate::config::{ConfigurationChanges, ConfigurationSnapshot};

impl AppContext {
    pub fn configuration(&self) -> ConfigurationSnapshot {
        self.settings.snapshot()
    }

    /// Returns the running configuration; `changes` are not applied.
    pub fn update_configuration(&self, changes: &ConfigurationChanges) -> ConfigurationSnapshot {
        if !changes.is_empty() {
            // TODO: write accepted changes to the settings file once one is loaded at startup
            warn!("Configuration changes are not persisted: {:?}", changes);
        }
        self.configuration()
    }
}
