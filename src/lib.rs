//! Typed HTTP client for the core-metadata catalog: addressables, devices,
//! device managers, device services, profiles, commands, provision watchers,
//! schedules and schedule events.
//!
//! ```no_run
//! use metadata_client::{ClientConfig, MetadataCatalog};
//!
//! let catalog = MetadataCatalog::connect(&ClientConfig::from_env())?;
//! for device in catalog.devices.by_label("hvac")? {
//!     println!("{}", device.name);
//! }
//! # Ok::<(), metadata_client::ClientError>(())
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod helpers;
pub mod interfaces;

pub use metadata_models as models;

pub use catalog::MetadataCatalog;
pub use client::{Resource, ResourceClient, ResourceKind, StatefulResource};
pub use config::ClientConfig;
pub use endpoint::EndpointResolver;
pub use error::{ClientError, ConfigError, ErrorKind};
