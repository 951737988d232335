use serde::Serialize;

use crate::database::entities::devices;

/// A stored device plus the fields derived from it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedDevice {
    pub device: devices::Model,
    pub supported: bool,
}

/// Enriches raw device records with derived fields.
pub trait DeviceAnnotator: Send + Sync {
    fn annotate(&self, device: devices::Model) -> AnnotatedDevice;

    fn annotate_all(&self, devices: Vec<devices::Model>) -> Vec<AnnotatedDevice> {
        devices.into_iter().map(|d| self.annotate(d)).collect()
    }
}

/// Marks a device as supported when it has an address and its model is on the allow-list.
#[derive(Clone, Debug)]
pub struct ModelAllowList {
    models: Vec<String>,
}

impl ModelAllowList {
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            models: models
                .into_iter()
                .map(|m| m.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn is_supported(&self, device: &devices::Model) -> bool {
        if device.address.trim().is_empty() {
            return false;
        }
        let model = device.model.trim().to_ascii_lowercase();
        self.models.iter().any(|m| *m == model)
    }
}

impl DeviceAnnotator for ModelAllowList {
    fn annotate(&self, device: devices::Model) -> AnnotatedDevice {
        let supported = self.is_supported(&device);
        AnnotatedDevice { device, supported }
    }
}
