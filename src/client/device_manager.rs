use super::ResourceClient;
use crate::error::ClientError;
use crate::models::DeviceManager;

impl ResourceClient<DeviceManager> {
    pub fn by_label(&self, label: &str) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["label", label])
    }

    pub fn for_service(&self, service_id: &str) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["service", service_id])
    }

    pub fn for_service_name(&self, service_name: &str) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["servicename", service_name])
    }

    pub fn for_profile(&self, profile_id: &str) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["profile", profile_id])
    }

    pub fn for_profile_name(&self, profile_name: &str) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["profilename", profile_name])
    }

    // The device manager collection serves addressable-id lookups under `device/`.
    pub fn for_addressable(&self, addressable_id: &str) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["device", addressable_id])
    }

    pub fn for_addressable_name(
        &self,
        addressable_name: &str,
    ) -> Result<Vec<DeviceManager>, ClientError> {
        self.list_by(&["addressablename", addressable_name])
    }
}
