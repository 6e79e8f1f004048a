use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::constants::defaults;
use crate::error::{ClientError, ConfigError};
use crate::interfaces::HttpTransport;

/// Looks up the root URL (scheme, host, port) of a running service.
pub trait ServiceDiscovery: Send + Sync {
    /// `None` when the registry has nothing usable for `service_name`.
    fn root_url(&self, service_name: &str) -> Option<Url>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CatalogEntry {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    service_address: Option<String>,
    #[serde(default)]
    service_port: Option<u16>,
}

impl CatalogEntry {
    fn root_url(&self) -> Option<Url> {
        let host = self
            .service_address
            .as_deref()
            .filter(|a| !a.is_empty())
            .or_else(|| self.address.as_deref().filter(|a| !a.is_empty()))?;
        let port = self.service_port?;
        Url::parse(&format!("http://{host}:{port}")).ok()
    }
}

/// Consul catalog lookup, `GET {consul}/v1/catalog/service/{name}`.
#[derive(Clone, Debug)]
pub struct ConsulDiscovery {
    catalog: HttpTransport,
}

impl ConsulDiscovery {
    pub fn new(consul_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut catalog = Url::parse(consul_url).map_err(|source| ConfigError::MalformedUrl {
            key: "consul".to_string(),
            url: consul_url.to_string(),
            source,
        })?;
        if catalog.cannot_be_a_base() {
            return Err(ConfigError::UnusableUrl(consul_url.to_string()));
        }
        if let Ok(mut path) = catalog.path_segments_mut() {
            path.pop_if_empty()
                .extend(defaults::CONSUL_CATALOG_PATH.split('/'));
        }
        Ok(ConsulDiscovery {
            catalog: HttpTransport::new(catalog, timeout),
        })
    }

    fn lookup(&self, service_name: &str) -> Result<Option<Url>, ClientError> {
        let entries: Vec<CatalogEntry> = self.catalog.get(&[service_name])?;
        Ok(entries.iter().find_map(CatalogEntry::root_url))
    }
}

impl ServiceDiscovery for ConsulDiscovery {
    fn root_url(&self, service_name: &str) -> Option<Url> {
        match self.lookup(service_name) {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                log::warn!("Service '{service_name}' is not registered in Consul");
                None
            }
            Err(e) => {
                log::warn!("Consul lookup for '{service_name}' failed: {e}");
                None
            }
        }
    }
}
