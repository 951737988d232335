use async_graphql::*;

use crate::config::{ConfigurationChanges, ConfigurationSnapshot};

#[derive(SimpleObject, Clone, Debug)]
pub struct Configuration {
    /// Multicast group used for device discovery
    pub home: String,
    pub port: u16,
    /// Seconds between discovery scans
    pub scanning_frequency: u32,
    pub playground_enabled: bool,
}

impl From<ConfigurationSnapshot> for Configuration {
    fn from(snapshot: ConfigurationSnapshot) -> Self {
        Self {
            home: snapshot.home,
            port: snapshot.port,
            scanning_frequency: snapshot.scanning_frequency,
            playground_enabled: snapshot.playground_enabled,
        }
    }
}

#[derive(InputObject, Default)]
pub struct ConfigurationInput {
    pub home: Option<String>,
    pub port: Option<u16>,
    pub scanning_frequency: Option<u32>,
    pub playground_enabled: Option<bool>,
}

impl From<ConfigurationInput> for ConfigurationChanges {
    fn from(input: ConfigurationInput) -> Self {
        Self {
            home: input.home,
            port: input.port,
            scanning_frequency: input.scanning_frequency,
            playground_enabled: input.playground_enabled,
        }
    }
}
