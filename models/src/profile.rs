use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::base::{impl_entity, null_as_default, BaseObject};

/// Template describing what a class of devices can do.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceProfile {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub objects: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub device_resources: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<Value>,
    /// Command names must be unique within a profile.
    #[serde(deserialize_with = "null_as_default")]
    pub commands: Vec<Command>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Command {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub get: Option<Action>,
    pub put: Option<Action>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    pub path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub responses: Vec<CommandResponse>,
    /// Only meaningful for `put` actions.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub parameter_names: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandResponse {
    pub code: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub expected_values: Vec<String>,
}

impl_entity!(DeviceProfile, Command);

impl DeviceProfile {
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }
}
