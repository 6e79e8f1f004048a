use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "info";
pub const METADATA_SERVICE_NAME: &str = "edgex-core-metadata";
pub const METADATA_BASE_URL: &str = "http://localhost:48081/api/v1";
pub const CONSUL_CATALOG_PATH: &str = "v1/catalog/service";
