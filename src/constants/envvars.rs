pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const METADATA_SERVICE_NAME: &str = "METADATA_SERVICE_NAME";
pub const METADATA_BASE_URL: &str = "METADATA_BASE_URL";
pub const METADATA_REQUEST_TIMEOUT_SECS: &str = "METADATA_REQUEST_TIMEOUT_SECS";
pub const CONSUL_URL: &str = "CONSUL_URL";

/// Per-collection overrides are `METADATA_<COLLECTION>_URL`, e.g. `METADATA_DEVICE_URL`.
pub fn collection_url(collection: &str) -> String {
    format!("METADATA_{}_URL", collection.to_ascii_uppercase())
}
