use super::ResourceClient;
use crate::error::ClientError;
use crate::models::{Addressable, DeviceService};

impl ResourceClient<DeviceService> {
    pub fn by_label(&self, label: &str) -> Result<Vec<DeviceService>, ClientError> {
        self.list_by(&["label", label])
    }

    pub fn for_addressable(&self, addressable_id: &str) -> Result<Vec<DeviceService>, ClientError> {
        self.list_by(&["addressable", addressable_id])
    }

    pub fn for_addressable_name(
        &self,
        addressable_name: &str,
    ) -> Result<Vec<DeviceService>, ClientError> {
        self.list_by(&["addressablename", addressable_name])
    }

    /// Distinct addressables of the devices owned by the service.
    pub fn addressables_for_associated_devices(
        &self,
        service_id: &str,
    ) -> Result<Vec<Addressable>, ClientError> {
        self.list_by(&["addressables", service_id])
    }

    pub fn addressables_for_associated_devices_by_name(
        &self,
        service_name: &str,
    ) -> Result<Vec<Addressable>, ClientError> {
        self.list_by(&["addressables", "name", service_name])
    }
}
