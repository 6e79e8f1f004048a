//! Typed clients for the catalog collections.
//!
//! Every collection is served by the same [`ResourceClient`], parametrized by
//! its entity type. The per-collection lookups live in inherent impls next to
//! each entity (`device.rs`, `schedule_event.rs`, ...); the partial updates
//! shared by devices, device managers and device services are in `state.rs`.
//!
//! Lookups by a related entity return the server's answer unchanged: an empty
//! list when nothing matches a label, model, manufacturer or identifier, but
//! [`ClientError::NotFound`] when the referenced service, profile, addressable
//! or schedule does not exist.

mod addressable;
mod command;
mod device;
mod device_manager;
mod device_profile;
mod device_service;
mod provision_watcher;
mod schedule;
mod schedule_event;
mod state;

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::constants::envvars;
use crate::endpoint::EndpointResolver;
use crate::error::{ClientError, ConfigError};
use crate::interfaces::HttpTransport;
use crate::models::{
    Addressable, Command, Device, DeviceManager, DeviceProfile, DeviceService, Entity,
    ProvisionWatcher, Schedule, ScheduleEvent,
};

pub use state::StatefulResource;

pub type AddressableClient = ResourceClient<Addressable>;
pub type CommandClient = ResourceClient<Command>;
pub type DeviceClient = ResourceClient<Device>;
pub type DeviceManagerClient = ResourceClient<DeviceManager>;
pub type DeviceProfileClient = ResourceClient<DeviceProfile>;
pub type DeviceServiceClient = ResourceClient<DeviceService>;
pub type ProvisionWatcherClient = ResourceClient<ProvisionWatcher>;
pub type ScheduleClient = ResourceClient<Schedule>;
pub type ScheduleEventClient = ResourceClient<ScheduleEvent>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Addressable,
    Command,
    Device,
    DeviceManager,
    DeviceProfile,
    DeviceService,
    ProvisionWatcher,
    Schedule,
    ScheduleEvent,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Addressable,
        ResourceKind::Command,
        ResourceKind::Device,
        ResourceKind::DeviceManager,
        ResourceKind::DeviceProfile,
        ResourceKind::DeviceService,
        ResourceKind::ProvisionWatcher,
        ResourceKind::Schedule,
        ResourceKind::ScheduleEvent,
    ];

    /// Path segment of the collection below the service root.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Addressable => "addressable",
            ResourceKind::Command => "command",
            ResourceKind::Device => "device",
            ResourceKind::DeviceManager => "devicemanager",
            ResourceKind::DeviceProfile => "deviceprofile",
            ResourceKind::DeviceService => "deviceservice",
            ResourceKind::ProvisionWatcher => "provisionwatcher",
            ResourceKind::Schedule => "schedule",
            ResourceKind::ScheduleEvent => "scheduleevent",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown resource '{0}'")]
pub struct UnknownResource(String);

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace(['-', '_'], "");
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.collection() == wanted)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// An entity type served by one catalog collection.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    const KIND: ResourceKind;

    /// Fetches by unique name; most collections answer with a single entity.
    fn fetch_by_name(transport: &HttpTransport, name: &str) -> Result<Self, ClientError> {
        transport.get(&["name", name])
    }
}

macro_rules! impl_resource {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Resource for $ty {
                const KIND: ResourceKind = ResourceKind::$kind;
            }
        )+
    };
}

impl_resource!(
    Addressable => Addressable,
    Device => Device,
    DeviceManager => DeviceManager,
    DeviceProfile => DeviceProfile,
    DeviceService => DeviceService,
    ProvisionWatcher => ProvisionWatcher,
    Schedule => Schedule,
    ScheduleEvent => ScheduleEvent,
);

/// CRUD and lookup operations on one catalog collection.
///
/// Every call is a single remote exchange; nothing is cached, retried or
/// shared mutably, so a client can be cloned and used from several threads.
pub struct ResourceClient<T> {
    transport: HttpTransport,
    entity: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        ResourceClient {
            transport: self.transport.clone(),
            entity: PhantomData,
        }
    }
}

impl<T: Resource> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("kind", &T::KIND)
            .field("endpoint", &self.transport.base().as_str())
            .finish()
    }
}

impl<T: Resource> ResourceClient<T> {
    /// Client for a collection at an already resolved `endpoint`.
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        ResourceClient {
            transport: HttpTransport::new(endpoint, timeout),
            entity: PhantomData,
        }
    }

    /// Resolves the collection endpoint from `config`, then builds the client.
    pub fn connect(config: &ClientConfig, resolver: &EndpointResolver) -> Result<Self, ConfigError> {
        let collection = T::KIND.collection();
        let endpoint = resolver.resolve(
            &config.service_name,
            &envvars::collection_url(collection),
            &config.static_url(collection),
        )?;
        Ok(Self::new(endpoint, config.request_timeout))
    }

    pub fn endpoint(&self) -> &Url {
        self.transport.base()
    }

    pub fn get(&self, id: &str) -> Result<T, ClientError> {
        self.transport.get(&[id])
    }

    pub fn get_by_name(&self, name: &str) -> Result<T, ClientError> {
        T::fetch_by_name(&self.transport, name)
    }

    /// All entities of the collection; empty when there are none.
    pub fn list(&self) -> Result<Vec<T>, ClientError> {
        self.transport.get(&[])
    }

    /// Returns the id assigned by the service.
    pub fn add(&self, entity: &T) -> Result<String, ClientError> {
        let id = self.transport.post(entity)?;
        log::debug!("Added {} '{}' as {id}", T::KIND, entity.name());
        Ok(id)
    }

    /// Full replace of the entity with the same id.
    pub fn update(&self, entity: &T) -> Result<bool, ClientError> {
        self.transport.put(&[], entity)
    }

    pub fn delete(&self, id: &str) -> Result<bool, ClientError> {
        self.transport.delete(&["id", id])
    }

    pub fn delete_by_name(&self, name: &str) -> Result<bool, ClientError> {
        self.transport.delete(&["name", name])
    }

    fn list_by<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<R>, ClientError> {
        self.transport.get(segments)
    }

    fn put_path(&self, segments: &[&str]) -> Result<bool, ClientError> {
        self.transport.put_empty(segments)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use mockito::Server;
    use url::Url;

    use super::{Resource, ResourceClient};

    pub fn client<T: Resource>(server: &Server) -> ResourceClient<T> {
        let endpoint =
            Url::parse(&format!("{}/api/v1/{}", server.url(), T::KIND.collection())).unwrap();
        ResourceClient::new(endpoint, Duration::from_secs(5))
    }
}
