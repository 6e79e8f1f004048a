use super::ResourceClient;
use crate::error::ClientError;
use crate::models::DeviceProfile;

impl ResourceClient<DeviceProfile> {
    pub fn by_label(&self, label: &str) -> Result<Vec<DeviceProfile>, ClientError> {
        self.list_by(&["label", label])
    }

    pub fn by_model(&self, model: &str) -> Result<Vec<DeviceProfile>, ClientError> {
        self.list_by(&["model", model])
    }

    pub fn by_manufacturer(&self, manufacturer: &str) -> Result<Vec<DeviceProfile>, ClientError> {
        self.list_by(&["manufacturer", manufacturer])
    }

    /// Profiles matching the manufacturer or the model.
    pub fn by_manufacturer_or_model(
        &self,
        manufacturer: &str,
        model: &str,
    ) -> Result<Vec<DeviceProfile>, ClientError> {
        self.list_by(&["manufacturer", manufacturer, "model", model])
    }
}
