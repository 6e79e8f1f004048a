use url::Url;

use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::interfaces::{ConsulDiscovery, ServiceDiscovery};

/// Decides the base URL of a collection, once, when a client is built.
///
/// A discovered service root replaces the scheme, host and port of the
/// statically configured URL; the configured path is always kept.
pub struct EndpointResolver {
    discovery: Option<Box<dyn ServiceDiscovery>>,
}

impl EndpointResolver {
    pub fn static_only() -> Self {
        EndpointResolver { discovery: None }
    }

    pub fn with_discovery(discovery: impl ServiceDiscovery + 'static) -> Self {
        EndpointResolver {
            discovery: Some(Box::new(discovery)),
        }
    }

    /// Uses Consul when `consul_url` is configured.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        match &config.consul_url {
            Some(consul_url) => Ok(Self::with_discovery(ConsulDiscovery::new(
                consul_url,
                config.request_timeout,
            )?)),
            None => Ok(Self::static_only()),
        }
    }

    /// Resolves `fallback` (named `key` in error messages) for `service_name`.
    ///
    /// A fallback that does not parse is fatal even when discovery succeeds,
    /// since its path is needed either way.
    pub fn resolve(&self, service_name: &str, key: &str, fallback: &str) -> Result<Url, ConfigError> {
        let configured = Url::parse(fallback.trim()).map_err(|source| ConfigError::MalformedUrl {
            key: key.to_string(),
            url: fallback.to_string(),
            source,
        })?;

        if let Some(root) = self.discover(service_name) {
            let mut url = root;
            url.set_path(configured.path());
            log::info!("Resolved {key} through discovery: {url}");
            return Ok(url);
        }

        if is_usable(&configured) {
            log::info!("Resolved {key} from configuration: {configured}");
            return Ok(configured);
        }
        Err(ConfigError::Unresolved(service_name.to_string()))
    }

    fn discover(&self, service_name: &str) -> Option<Url> {
        let root = self.discovery.as_ref()?.root_url(service_name)?;
        if is_usable(&root) {
            Some(root)
        } else {
            log::warn!("Ignoring unusable discovered root {root} for '{service_name}'");
            None
        }
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::static_only()
    }
}

fn is_usable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRoot(Option<&'static str>);

    impl ServiceDiscovery for FixedRoot {
        fn root_url(&self, _service_name: &str) -> Option<Url> {
            self.0.map(|u| Url::parse(u).unwrap())
        }
    }

    const DEVICE_URL: &str = "http://localhost:48081/api/v1/device";

    #[test]
    fn test_static_url_without_discovery() {
        let url = EndpointResolver::static_only()
            .resolve("edgex-core-metadata", "device", DEVICE_URL)
            .unwrap();
        assert_eq!(url.as_str(), DEVICE_URL);
    }

    #[test]
    fn test_discovered_root_keeps_configured_path() {
        let resolver = EndpointResolver::with_discovery(FixedRoot(Some("http://10.0.0.7:48081")));
        let url = resolver.resolve("edgex-core-metadata", "device", DEVICE_URL).unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.7:48081/api/v1/device");
    }

    #[test]
    fn test_falls_back_when_discovery_is_empty() {
        let resolver = EndpointResolver::with_discovery(FixedRoot(None));
        let url = resolver.resolve("edgex-core-metadata", "device", DEVICE_URL).unwrap();
        assert_eq!(url.as_str(), DEVICE_URL);
    }

    #[test]
    fn test_unusable_discovered_root_is_ignored() {
        let resolver = EndpointResolver::with_discovery(FixedRoot(Some("ftp://10.0.0.7")));
        let url = resolver.resolve("edgex-core-metadata", "device", DEVICE_URL).unwrap();
        assert_eq!(url.as_str(), DEVICE_URL);
    }

    #[test]
    fn test_malformed_fallback_is_fatal_even_with_discovery() {
        let resolver = EndpointResolver::with_discovery(FixedRoot(Some("http://10.0.0.7:48081")));
        let err = resolver
            .resolve("edgex-core-metadata", "METADATA_DEVICE_URL", "http://[::1/api/v1/device")
            .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedUrl { .. }));
        assert!(err.to_string().contains("METADATA_DEVICE_URL"));
    }

    #[test]
    fn test_unusable_everywhere_is_unresolved() {
        let resolver = EndpointResolver::with_discovery(FixedRoot(None));
        let err = resolver
            .resolve("edgex-core-metadata", "device", "mailto:ops@example.com")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Unresolved(ref name) if name == "edgex-core-metadata"));
    }
}
