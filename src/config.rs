use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::client::ResourceKind;
use crate::constants::{defaults, envvars};

/// Where the catalog lives and how long a single call may take.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Logical name looked up through service discovery.
    pub service_name: String,
    /// Static root of all collections, e.g. `http://localhost:48081/api/v1`.
    pub base_url: String,
    /// Static URLs that replace `<base_url>/<collection>` for one collection.
    pub collection_urls: HashMap<String, String>,
    /// Discovery agent; discovery is skipped when unset.
    pub consul_url: Option<String>,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            service_name: defaults::METADATA_SERVICE_NAME.to_string(),
            base_url: defaults::METADATA_BASE_URL.to_string(),
            collection_urls: HashMap::new(),
            consul_url: None,
            request_timeout: defaults::API_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();

        if let Ok(service_name) = env::var(envvars::METADATA_SERVICE_NAME) {
            config.service_name = service_name;
        }
        if let Ok(base_url) = env::var(envvars::METADATA_BASE_URL) {
            config.base_url = base_url;
        }
        config.consul_url = env::var(envvars::CONSUL_URL)
            .ok()
            .filter(|url| !url.trim().is_empty());

        if let Ok(secs) = env::var(envvars::METADATA_REQUEST_TIMEOUT_SECS) {
            // A zero timeout would fail every call at once.
            match secs.trim().parse::<u64>() {
                Ok(0) => log::warn!(
                    "Ignoring {}=0; using {}s",
                    envvars::METADATA_REQUEST_TIMEOUT_SECS,
                    defaults::API_REQUEST_TIMEOUT.as_secs()
                ),
                Ok(secs) => config.request_timeout = Duration::from_secs(secs),
                Err(e) => log::warn!(
                    "Ignoring {}={secs} ({e}); using {}s",
                    envvars::METADATA_REQUEST_TIMEOUT_SECS,
                    defaults::API_REQUEST_TIMEOUT.as_secs()
                ),
            }
        }

        for kind in ResourceKind::ALL {
            if let Ok(url) = env::var(envvars::collection_url(kind.collection())) {
                config.collection_urls.insert(kind.collection().to_string(), url);
            }
        }

        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_collection_url(mut self, collection: &str, url: impl Into<String>) -> Self {
        self.collection_urls.insert(collection.to_string(), url.into());
        self
    }

    /// The statically configured URL of a collection.
    pub fn static_url(&self, collection: &str) -> String {
        match self.collection_urls.get(collection) {
            Some(url) => url.clone(),
            None => format!("{}/{collection}", self.base_url.trim_end_matches('/')),
        }
    }
}
