use async_graphql::*;
use chrono::{DateTime, Utc};

use super::optional_change;
use crate::services::{AnnotatedDevice, DeviceChanges, NewDevice};

#[derive(SimpleObject, Clone, Debug)]
pub struct Device {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub model: String,
    pub firmware: Option<String>,
    /// Whether the app can be launched against this device
    pub supported: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AnnotatedDevice> for Device {
    fn from(annotated: AnnotatedDevice) -> Self {
        let AnnotatedDevice { device, supported } = annotated;
        Self {
            id: device.id,
            name: device.name,
            address: device.address,
            model: device.model,
            firmware: device.firmware,
            supported,
            created_at: device.created_at,
            updated_at: device.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct DeviceInput {
    pub name: String,
    pub address: String,
    pub model: String,
    pub firmware: Option<String>,
}

impl From<DeviceInput> for NewDevice {
    fn from(input: DeviceInput) -> Self {
        Self {
            name: input.name,
            address: input.address,
            model: input.model,
            firmware: input.firmware,
        }
    }
}

#[derive(InputObject, Default)]
pub struct DeviceChangesInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub model: Option<String>,
    /// An explicit `null` clears the firmware version
    pub firmware: MaybeUndefined<String>,
}

impl From<DeviceChangesInput> for DeviceChanges {
    fn from(input: DeviceChangesInput) -> Self {
        Self {
            name: input.name,
            address: input.address,
            model: input.model,
            firmware: optional_change(input.firmware),
        }
    }
}
