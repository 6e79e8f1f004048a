use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::base::{impl_entity, null_as_default, BaseObject};
use crate::{DeviceProfile, DeviceService, OperatingState};

/// Rule that auto-provisions devices whose identifiers match all key/value
/// pairs, using the given profile and service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProvisionWatcher {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identifiers: BTreeMap<String, String>,
    pub profile: Option<DeviceProfile>,
    pub service: Option<DeviceService>,
    #[serde(deserialize_with = "null_as_default")]
    pub operating_state: OperatingState,
}

impl_entity!(ProvisionWatcher);

impl ProvisionWatcher {
    pub fn add_identifier(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.identifiers.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_serialize_as_object() {
        let mut watcher = ProvisionWatcher {
            name: "watcher".into(),
            ..Default::default()
        };
        watcher.add_identifier("MAC", "00-05-1B-A1-99-99");
        watcher.add_identifier("HTTP", "10.0.1.1");
        let json = serde_json::to_value(&watcher).unwrap();
        assert_eq!(json["identifiers"]["MAC"], "00-05-1B-A1-99-99");
        assert_eq!(json["operatingState"], "enabled");
    }
}
