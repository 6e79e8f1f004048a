use crate::client::{
    AddressableClient, CommandClient, DeviceClient, DeviceManagerClient, DeviceProfileClient,
    DeviceServiceClient, ProvisionWatcherClient, ScheduleClient, ScheduleEventClient,
};
use crate::config::ClientConfig;
use crate::endpoint::EndpointResolver;
use crate::error::ConfigError;

/// One client per catalog collection, all resolved from the same configuration.
#[derive(Clone, Debug)]
pub struct MetadataCatalog {
    pub addressables: AddressableClient,
    pub commands: CommandClient,
    pub devices: DeviceClient,
    pub device_managers: DeviceManagerClient,
    pub device_profiles: DeviceProfileClient,
    pub device_services: DeviceServiceClient,
    pub provision_watchers: ProvisionWatcherClient,
    pub schedules: ScheduleClient,
    pub schedule_events: ScheduleEventClient,
}

impl MetadataCatalog {
    /// Builds the resolver from `config` (Consul when configured) and connects
    /// every collection.
    pub fn connect(config: &ClientConfig) -> Result<Self, ConfigError> {
        let resolver = EndpointResolver::from_config(config)?;
        Self::connect_with(config, &resolver)
    }

    pub fn connect_with(config: &ClientConfig, resolver: &EndpointResolver) -> Result<Self, ConfigError> {
        Ok(MetadataCatalog {
            addressables: AddressableClient::connect(config, resolver)?,
            commands: CommandClient::connect(config, resolver)?,
            devices: DeviceClient::connect(config, resolver)?,
            device_managers: DeviceManagerClient::connect(config, resolver)?,
            device_profiles: DeviceProfileClient::connect(config, resolver)?,
            device_services: DeviceServiceClient::connect(config, resolver)?,
            provision_watchers: ProvisionWatcherClient::connect(config, resolver)?,
            schedules: ScheduleClient::connect(config, resolver)?,
            schedule_events: ScheduleEventClient::connect(config, resolver)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use url::Url;

    use crate::interfaces::ServiceDiscovery;

    struct Registry(&'static str);

    impl ServiceDiscovery for Registry {
        fn root_url(&self, _service_name: &str) -> Option<Url> {
            Url::parse(self.0).ok()
        }
    }

    #[test]
    fn test_every_collection_under_base_url() {
        let config = ClientConfig::default().with_base_url("http://meta:48081/api/v1");
        let catalog = MetadataCatalog::connect(&config).unwrap();

        assert_eq!(
            catalog.addressables.endpoint().as_str(),
            "http://meta:48081/api/v1/addressable"
        );
        assert_eq!(
            catalog.device_managers.endpoint().as_str(),
            "http://meta:48081/api/v1/devicemanager"
        );
        assert_eq!(
            catalog.schedule_events.endpoint().as_str(),
            "http://meta:48081/api/v1/scheduleevent"
        );
    }

    #[test]
    fn test_discovered_root_keeps_configured_paths() {
        let config = ClientConfig::default()
            .with_collection_url("provisionwatcher", "http://localhost:48081/api/v1/provisionwatcher");
        let resolver = EndpointResolver::with_discovery(Registry("http://10.0.0.7:48081"));
        let catalog = MetadataCatalog::connect_with(&config, &resolver).unwrap();

        assert_eq!(
            catalog.provision_watchers.endpoint().as_str(),
            "http://10.0.0.7:48081/api/v1/provisionwatcher"
        );
        assert_eq!(catalog.devices.endpoint().host_str(), Some("10.0.0.7"));
    }

    #[test]
    fn test_one_bad_collection_fails_the_catalog() {
        let config = ClientConfig::default().with_collection_url("command", "not a url");
        assert!(matches!(
            MetadataCatalog::connect(&config),
            Err(ConfigError::MalformedUrl { .. })
        ));
    }
}
