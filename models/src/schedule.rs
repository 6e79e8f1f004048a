use serde::{Deserialize, Serialize};

use crate::base::{impl_entity, null_as_default, BaseObject};
use crate::Addressable;

/// Recurring time window, either a fixed `frequency` or a `cron` expression.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub frequency: Option<String>,
    pub cron: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub run_once: bool,
}

/// Binds a schedule, referenced by name, to an addressable target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleEvent {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub schedule: Option<String>,
    pub addressable: Option<Addressable>,
    pub parameters: Option<String>,
    pub service: Option<String>,
}

impl_entity!(Schedule, ScheduleEvent);
