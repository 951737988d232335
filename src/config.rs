use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MULTICAST_HOME: &str = "239.255.42.99";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_SCANNING_FREQUENCY: u32 = 30;
pub const DEFAULT_LAUNCH_COMMAND: &str = "xdg-open";
pub const DEFAULT_SUPPORTED_MODELS: &[&str] = &["lumen-strip", "lumen-panel", "lumen-bulb"];

/// Static runtime settings, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Multicast group devices announce themselves on.
    pub multicast_home: String,
    pub port: u16,
    /// Seconds between discovery scans.
    pub scanning_frequency: u32,
    pub disable_playground: bool,
    /// Program spawned by the launcher, receiving the device address as its last argument.
    pub launch_command: String,
    pub supported_models: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multicast_home: DEFAULT_MULTICAST_HOME.to_string(),
            port: DEFAULT_PORT,
            scanning_frequency: DEFAULT_SCANNING_FREQUENCY,
            disable_playground: false,
            launch_command: DEFAULT_LAUNCH_COMMAND.to_string(),
            supported_models: DEFAULT_SUPPORTED_MODELS
                .iter()
                .map(|model| model.to_string())
                .collect(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(home) = non_empty(lookup("MULTICAST_HOME")) {
            settings.multicast_home = home;
        }
        if let Some(port) = non_empty(lookup("PORT")) {
            settings.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value '{}'", port))?;
        }
        if let Some(frequency) = non_empty(lookup("SCANNING_FREQUENCY")) {
            settings.scanning_frequency = frequency
                .parse()
                .with_context(|| format!("Invalid SCANNING_FREQUENCY value '{}'", frequency))?;
        }
        if let Some(flag) = non_empty(lookup("DISABLE_PLAYGROUND")) {
            settings.disable_playground = is_truthy(&flag);
        }
        if let Some(command) = non_empty(lookup("LAUNCH_COMMAND")) {
            settings.launch_command = command;
        }
        if let Some(models) = non_empty(lookup("SUPPORTED_MODELS")) {
            settings.supported_models = models
                .split(',')
                .map(str::trim)
                .filter(|model| !model.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(settings)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn playground_enabled(&self) -> bool {
        !self.disable_playground
    }

    pub fn snapshot(&self) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            home: self.multicast_home.clone(),
            port: self.port,
            scanning_frequency: self.scanning_frequency,
            playground_enabled: self.playground_enabled(),
        }
    }
}

/// The externally visible slice of the settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSnapshot {
    pub home: String,
    pub port: u16,
    pub scanning_frequency: u32,
    pub playground_enabled: bool,
}

/// Requested configuration edits. Accepted by the API but not applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationChanges {
    pub home: Option<String>,
    pub port: Option<u16>,
    pub scanning_frequency: Option<u32>,
    pub playground_enabled: Option<bool>,
}

impl ConfigurationChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.playground_enabled());
    }

    #[test]
    fn test_reads_all_keys() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("MULTICAST_HOME", "239.0.0.7"),
            ("PORT", "8080"),
            ("SCANNING_FREQUENCY", "5"),
            ("DISABLE_PLAYGROUND", "TRUE"),
            ("LAUNCH_COMMAND", "/usr/bin/open"),
            ("SUPPORTED_MODELS", "a, b,,c "),
        ]))
        .unwrap();

        assert_eq!(settings.multicast_home, "239.0.0.7");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.scanning_frequency, 5);
        assert!(settings.disable_playground);
        assert_eq!(settings.launch_command, "/usr/bin/open");
        assert_eq!(settings.supported_models, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let err = Settings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_snapshot_inverts_playground_flag() {
        let settings = Settings {
            disable_playground: true,
            ..Settings::default()
        };
        let snapshot = settings.snapshot();
        assert!(!snapshot.playground_enabled);
        assert_eq!(snapshot.home, DEFAULT_MULTICAST_HOME);
        assert_eq!(snapshot.port, DEFAULT_PORT);
    }
}
