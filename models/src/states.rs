use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminState {
    #[serde(alias = "LOCKED")]
    Locked,
    #[default]
    #[serde(alias = "UNLOCKED")]
    Unlocked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingState {
    #[default]
    #[serde(alias = "ENABLED")]
    Enabled,
    #[serde(alias = "DISABLED")]
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStateError(String);

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown state '{}'", self.0)
    }
}

impl std::error::Error for ParseStateError {}

impl AdminState {
    /// Wire form, as used in `.../adminstate/{state}` paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminState::Locked => "locked",
            AdminState::Unlocked => "unlocked",
        }
    }
}

impl OperatingState {
    /// Wire form, as used in `.../opstate/{state}` paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingState::Enabled => "enabled",
            OperatingState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for AdminState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OperatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "locked" => Ok(AdminState::Locked),
            "unlocked" => Ok(AdminState::Unlocked),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}

impl FromStr for OperatingState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enabled" => Ok(OperatingState::Enabled),
            "disabled" => Ok(OperatingState::Disabled),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}
