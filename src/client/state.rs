use super::{Resource, ResourceClient};
use crate::error::ClientError;
use crate::models::{AdminState, Device, DeviceManager, DeviceService, OperatingState};

/// Entities that track connection times and admin/operating states, and
/// accept partial updates of them.
pub trait StatefulResource: Resource {}

impl StatefulResource for Device {}
impl StatefulResource for DeviceManager {}
impl StatefulResource for DeviceService {}

impl<T: StatefulResource> ResourceClient<T> {
    /// `time` is in epoch milliseconds.
    pub fn update_last_connected(&self, id: &str, time: i64) -> Result<bool, ClientError> {
        self.put_path(&[id, "lastconnected", &time.to_string()])
    }

    pub fn update_last_connected_by_name(&self, name: &str, time: i64) -> Result<bool, ClientError> {
        self.put_path(&["name", name, "lastconnected", &time.to_string()])
    }

    pub fn update_last_reported(&self, id: &str, time: i64) -> Result<bool, ClientError> {
        self.put_path(&[id, "lastreported", &time.to_string()])
    }

    pub fn update_last_reported_by_name(&self, name: &str, time: i64) -> Result<bool, ClientError> {
        self.put_path(&["name", name, "lastreported", &time.to_string()])
    }

    pub fn update_op_state(&self, id: &str, state: OperatingState) -> Result<bool, ClientError> {
        self.put_path(&[id, "opstate", state.as_str()])
    }

    pub fn update_op_state_by_name(
        &self,
        name: &str,
        state: OperatingState,
    ) -> Result<bool, ClientError> {
        self.put_path(&["name", name, "opstate", state.as_str()])
    }

    pub fn update_admin_state(&self, id: &str, state: AdminState) -> Result<bool, ClientError> {
        self.put_path(&[id, "adminstate", state.as_str()])
    }

    pub fn update_admin_state_by_name(&self, name: &str, state: AdminState) -> Result<bool, ClientError> {
        self.put_path(&["name", name, "adminstate", state.as_str()])
    }
}
