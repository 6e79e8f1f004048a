use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::base::{impl_entity, null_as_default, BaseObject, Entity};
use crate::{AdminState, Addressable, DeviceProfile, OperatingState};

/// A physical or virtual device registered in the catalog.
///
/// The embedded addressable, profile and service must already exist in the
/// catalog when the device is added.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    pub location: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_state: AdminState,
    #[serde(deserialize_with = "null_as_default")]
    pub operating_state: OperatingState,
    #[serde(deserialize_with = "null_as_default")]
    pub last_connected: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_reported: i64,
    pub addressable: Option<Addressable>,
    pub profile: Option<DeviceProfile>,
    pub service: Option<DeviceService>,
}

/// A device manager has the same wire shape as a device.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceManager {
    #[serde(flatten)]
    pub device: Device,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceService {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_state: AdminState,
    #[serde(deserialize_with = "null_as_default")]
    pub operating_state: OperatingState,
    #[serde(deserialize_with = "null_as_default")]
    pub last_connected: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub last_reported: i64,
    pub addressable: Option<Addressable>,
}

impl_entity!(Device, DeviceService);

impl From<Device> for DeviceManager {
    fn from(device: Device) -> Self {
        DeviceManager { device }
    }
}

impl Entity for DeviceManager {
    fn base(&self) -> &BaseObject {
        &self.device.base
    }

    fn base_mut(&mut self) -> &mut BaseObject {
        &mut self.device.base
    }

    fn name(&self) -> &str {
        &self.device.name
    }
}
