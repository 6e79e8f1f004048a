use super::ResourceClient;
use crate::error::ClientError;
use crate::models::ProvisionWatcher;

impl ResourceClient<ProvisionWatcher> {
    pub fn for_profile(&self, profile_id: &str) -> Result<Vec<ProvisionWatcher>, ClientError> {
        self.list_by(&["profile", profile_id])
    }

    pub fn for_profile_name(&self, profile_name: &str) -> Result<Vec<ProvisionWatcher>, ClientError> {
        self.list_by(&["profilename", profile_name])
    }

    pub fn for_service(&self, service_id: &str) -> Result<Vec<ProvisionWatcher>, ClientError> {
        self.list_by(&["service", service_id])
    }

    pub fn for_service_name(&self, service_name: &str) -> Result<Vec<ProvisionWatcher>, ClientError> {
        self.list_by(&["servicename", service_name])
    }

    /// Watchers whose identifiers map `key` to `value`; empty when none do.
    pub fn for_identifier(&self, key: &str, value: &str) -> Result<Vec<ProvisionWatcher>, ClientError> {
        self.list_by(&["identifier", key, value])
    }
}
